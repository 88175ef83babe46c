//! Application configuration structures

use bikereport_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportSettings {
    /// Dataset loading configuration
    #[validate]
    pub data: DataSettings,

    /// Graph rendering settings
    #[validate]
    pub graph: GraphSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Dataset loading configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataSettings {
    /// Ordered list of filesystem locations probed for the input CSV.
    /// The first candidate that parses with the required columns wins.
    #[validate(custom(
        function = "crate::validation::validate_source_candidates",
        message = "Source candidate paths must be non-empty"
    ))]
    pub source_candidates: Vec<PathBuf>,

    /// Fall back to the built-in sample dataset when every candidate
    /// (and any uploaded table) fails
    pub allow_synthetic_fallback: bool,

    /// Number of most recent distinct year ordinals to keep
    #[validate(range(min = 1, max = 10, message = "Recent year window must be between 1 and 10"))]
    pub recent_year_window: usize,
}

/// Graph rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GraphSettings {
    /// Graph width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Graph height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Directory the report and rendered charts are written to
    pub output_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Whether to use the compact JSON-friendly format
    pub json_format: bool,

    /// Optional log file path
    pub file: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            graph: GraphSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ReportSettings {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source_candidates: vec![
                PathBuf::from("all_data.csv"),
                PathBuf::from("data/all_data.csv"),
                PathBuf::from("dashboard/all_data.csv"),
            ],
            allow_synthetic_fallback: false,
            recent_year_window: 2,
        }
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            output_dir: PathBuf::from("report"),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert into the logging initialization config
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = ReportSettings::default();
        assert!(settings.validate_all().is_ok());
        assert_eq!(settings.data.recent_year_window, 2);
        assert!(!settings.data.allow_synthetic_fallback);
        assert_eq!(settings.graph.width, 1000);
    }

    #[test]
    fn test_window_out_of_range_rejected() {
        let mut settings = ReportSettings::default();
        settings.data.recent_year_window = 0;
        assert!(settings.validate_all().is_err());

        settings.data.recent_year_window = 11;
        assert!(settings.validate_all().is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut settings = ReportSettings::default();
        settings.logging.level = "verbose".to_string();
        assert!(settings.validate_all().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "data:\n  allow_synthetic_fallback: true\n";
        let settings: ReportSettings = serde_yaml::from_str(yaml).unwrap();

        assert!(settings.data.allow_synthetic_fallback);
        assert_eq!(settings.data.recent_year_window, 2);
        assert_eq!(settings.graph.height, 600);
    }

    #[test]
    fn test_logging_conversion() {
        let mut settings = LoggingSettings::default();
        settings.level = "debug".to_string();
        settings.json_format = true;

        let config = settings.to_logging_config();
        assert_eq!(config.level, "debug");
        assert!(config.json_format);
        assert!(config.file_path.is_none());
    }
}
