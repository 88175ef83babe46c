//! Configuration management for the bikereport pipeline

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{DataSettings, GraphSettings, LoggingSettings, ReportSettings};
