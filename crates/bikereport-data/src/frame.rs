//! Immutable rental-record frame with derivation and filter operations

use bikereport_common::RentalRecord;

/// An immutable snapshot of rental records.
///
/// Filter operations return new frames; the source frame is never
/// mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalFrame {
    records: Vec<RentalRecord>,
}

impl RentalFrame {
    /// Create a frame from loaded records
    pub fn new(records: Vec<RentalRecord>) -> Self {
        Self { records }
    }

    /// An empty frame carrying the full record schema
    pub fn empty() -> Self {
        Self { records: Vec::new() }
    }

    /// All records in load order
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep rows whose `year_index` is among the most recent `window`
    /// distinct ordinal values present.
    ///
    /// The comparison is literal: a row survives when its ordinal is
    /// within `window - 1` of the maximum ordinal in the frame. No
    /// calendar semantics are assumed. An empty frame stays empty.
    pub fn filter_recent_periods(&self, window: usize) -> Self {
        let Some(max_year) = self.records.iter().map(|r| r.year_index).max() else {
            return Self::empty();
        };

        let cutoff = max_year - (window.saturating_sub(1)) as i32;
        self.filtered(|r| r.year_index >= cutoff)
    }

    /// Rows falling on a weekend (`weekday_index` 0 or 6)
    pub fn weekends(&self) -> Self {
        self.filtered(RentalRecord::is_weekend)
    }

    /// Rows falling on a workday (`weekday_index` 1 through 5)
    pub fn workdays(&self) -> Self {
        self.filtered(|r| !r.is_weekend())
    }

    fn filtered(&self, keep: impl Fn(&RentalRecord) -> bool) -> Self {
        Self {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

impl FromIterator<RentalRecord> for RentalFrame {
    fn from_iter<I: IntoIterator<Item = RentalRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
