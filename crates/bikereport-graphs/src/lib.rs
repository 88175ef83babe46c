//! Question pipelines and chart rendering for bikereport
//!
//! Each report question is a pure function from a prepared
//! [`bikereport_data::RentalFrame`] to a chart-ready structure, paired
//! with a plotters renderer that draws it to a PNG. Pipelines never
//! mutate their input and tolerate empty frames; only rendering an
//! empty chart is an error.

pub mod seasonal_trend;
pub mod types;
pub mod user_comparison;
pub mod weather_weekend;

pub use seasonal_trend::{seasonal_trend, SeasonalTrendChart, SeasonalTrendGraph};
pub use types::{GraphConfig, GraphRenderer};
pub use user_comparison::{user_comparison, UserComparisonChart, UserComparisonGraph};
pub use weather_weekend::{weather_weekend, WeatherWeekendChart, WeatherWeekendGraph};
