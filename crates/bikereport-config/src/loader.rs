//! Configuration loading utilities

use crate::ReportSettings;
use bikereport_common::Result as BikeReportResult;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for bikereport_common::BikeReportError {
    fn from(err: ConfigError) -> Self {
        bikereport_common::BikeReportError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReportSettings, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut settings: ReportSettings = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut settings)?;

        settings.validate_all().map_err(ConfigError::ValidationError)?;

        Ok(settings)
    }

    /// Load configuration from the default locations.
    ///
    /// Resolution order: `BIKEREPORT_CONFIG_PATH`, then `bikereport.yaml`
    /// / `bikereport.yml` in the working directory, then built-in
    /// defaults. Environment overrides apply in every case.
    pub fn load() -> BikeReportResult<ReportSettings> {
        let settings = if let Ok(config_path) = env::var("BIKEREPORT_CONFIG_PATH") {
            debug!(path = %config_path, "Loading configuration from BIKEREPORT_CONFIG_PATH");
            Self::load_config(&config_path)?
        } else if Path::new("bikereport.yaml").exists() {
            Self::load_config("bikereport.yaml")?
        } else if Path::new("bikereport.yml").exists() {
            Self::load_config("bikereport.yml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut settings = ReportSettings::default();
            Self::apply_env_overrides(&mut settings)?;
            settings.validate_all().map_err(ConfigError::ValidationError)?;
            settings
        };

        Ok(settings)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BikeReportResult<ReportSettings> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(settings: &mut ReportSettings) -> Result<(), ConfigError> {
        // Data configuration overrides
        if let Ok(path) = env::var("BIKEREPORT_DATA_PATH") {
            // The explicit path becomes the highest-priority candidate
            settings.data.source_candidates.insert(0, PathBuf::from(path));
        }

        if let Ok(allow) = env::var("BIKEREPORT_ALLOW_SYNTHETIC") {
            settings.data.allow_synthetic_fallback =
                allow.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "BIKEREPORT_ALLOW_SYNTHETIC".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(window) = env::var("BIKEREPORT_RECENT_WINDOW") {
            settings.data.recent_year_window =
                window.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "BIKEREPORT_RECENT_WINDOW".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Graph configuration overrides
        if let Ok(width) = env::var("BIKEREPORT_GRAPH_WIDTH") {
            settings.graph.width = width.parse().map_err(|e| ConfigError::EnvParseError {
                var: "BIKEREPORT_GRAPH_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(height) = env::var("BIKEREPORT_GRAPH_HEIGHT") {
            settings.graph.height = height.parse().map_err(|e| ConfigError::EnvParseError {
                var: "BIKEREPORT_GRAPH_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(output_dir) = env::var("BIKEREPORT_OUTPUT_DIR") {
            settings.graph.output_dir = PathBuf::from(output_dir);
        }

        // Logging configuration overrides
        if let Ok(level) = env::var("BIKEREPORT_LOG_LEVEL") {
            settings.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "data:\n  source_candidates: [\"custom.csv\"]\n  recent_year_window: 3\ngraph:\n  width: 1200"
        )
        .unwrap();

        let settings = ConfigLoader::load_config(file.path()).unwrap();
        assert_eq!(settings.data.source_candidates, vec![PathBuf::from("custom.csv")]);
        assert_eq!(settings.data.recent_year_window, 3);
        assert_eq!(settings.graph.width, 1200);
        // Untouched sections keep defaults
        assert_eq!(settings.graph.height, 600);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data:\n  recent_year_window: 0").unwrap();

        let result = ConfigLoader::load_config(file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data: [not, a, mapping").unwrap();

        let result = ConfigLoader::load_config(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConfigLoader::load_config("/nonexistent/bikereport.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_config_error_converts_to_report_error() {
        let err = ConfigError::EnvParseError {
            var: "BIKEREPORT_GRAPH_WIDTH".to_string(),
            source: "not a number".into(),
        };
        let report_err: bikereport_common::BikeReportError = err.into();
        assert!(report_err.to_string().contains("Configuration error"));
    }
}
