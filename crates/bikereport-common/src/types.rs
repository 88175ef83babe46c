//! Core domain types for the bike-rental dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One aggregated observation of bike-sharing activity, one row per day.
///
/// Field names map onto the daily columns of the source CSV
/// (`year_day`, `month_day`, ...). Extra CSV columns are ignored during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Nominal year ordinal, not necessarily a calendar year
    #[serde(rename = "year_day")]
    pub year_index: i32,

    /// Month number, 1-12
    #[serde(rename = "month_day")]
    pub month_index: u32,

    /// Day of week, 0-6 where 0 and 6 are the weekend
    #[serde(rename = "weekday_day")]
    pub weekday_index: u32,

    /// Weather code: 1 = clear, 2 = cloudy, 3 = rain
    #[serde(rename = "weathersit_day")]
    pub weather_situation: u8,

    /// Total rentals that day
    #[serde(rename = "count_day")]
    pub rental_count: u32,

    /// Rentals by casual (non-subscribed) users
    #[serde(rename = "casual_day")]
    pub casual_count: u32,

    /// Rentals by registered users
    #[serde(rename = "registered_day")]
    pub registered_count: u32,
}

impl RentalRecord {
    /// Date of the observation, derived from the year and month indices.
    ///
    /// Returns `None` for malformed combinations instead of failing;
    /// a single bad row must never abort a report.
    pub fn date(&self) -> Option<NaiveDate> {
        derive_date(self.year_index, self.month_index)
    }

    /// Season the observation falls in.
    ///
    /// # Panics
    ///
    /// Panics if `month_index` is outside 1-12; feeding an unvalidated
    /// month here is a caller error.
    pub fn season(&self) -> Season {
        Season::from_month(self.month_index)
    }

    /// Whether the observation falls on a Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        self.weekday_index == 0 || self.weekday_index == 6
    }

    /// Whether `casual_count + registered_count` adds up to `rental_count`.
    ///
    /// The sum is taken in `u64` so counts near `u32::MAX` compare
    /// correctly instead of overflowing.
    pub fn counts_consistent(&self) -> bool {
        u64::from(self.casual_count) + u64::from(self.registered_count)
            == u64::from(self.rental_count)
    }
}

/// Construct an observation date from the year and month indices using
/// the first-of-month convention of the source data.
///
/// Malformed combinations (month 0, month 13, ...) yield `None`, never
/// an error.
pub fn derive_date(year_index: i32, month_index: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year_index, month_index, 1)
}

/// Fixed four-way partition of calendar months used for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in reporting order
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Season for a month number.
    ///
    /// Winter = {12, 1, 2}, Spring = {3, 4, 5}, Summer = {6, 7, 8},
    /// Fall = {9, 10, 11}. Total and exhaustive over 1-12.
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1-12.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            other => panic!("month index out of range 1-12: {other}"),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weather situation decoded from the ordinal weather code.
///
/// The source data dictionary defines codes 1-3; anything else is kept
/// under its numeric code so an unexpected dataset still reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherSituation {
    Clear,
    Cloudy,
    Rain,
    Other(u8),
}

impl WeatherSituation {
    /// Decode a raw weather code
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => WeatherSituation::Clear,
            2 => WeatherSituation::Cloudy,
            3 => WeatherSituation::Rain,
            other => WeatherSituation::Other(other),
        }
    }

    /// The raw weather code
    pub fn code(&self) -> u8 {
        match self {
            WeatherSituation::Clear => 1,
            WeatherSituation::Cloudy => 2,
            WeatherSituation::Rain => 3,
            WeatherSituation::Other(code) => *code,
        }
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherSituation::Clear => f.write_str("Clear"),
            WeatherSituation::Cloudy => f.write_str("Cloudy"),
            WeatherSituation::Rain => f.write_str("Rain"),
            WeatherSituation::Other(code) => write!(f, "Code {code}"),
        }
    }
}

impl PartialOrd for WeatherSituation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeatherSituation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code().cmp(&other.code())
    }
}
