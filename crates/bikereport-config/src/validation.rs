//! Validation utilities for configuration values

use std::path::PathBuf;
use validator::ValidationError;

/// Validate a log level string
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate the candidate path list.
///
/// An empty list is allowed (the loader then goes straight to the
/// upload and synthetic fallbacks), but blank entries are not.
pub fn validate_source_candidates(candidates: &[PathBuf]) -> Result<(), ValidationError> {
    for candidate in candidates {
        if candidate.as_os_str().is_empty() {
            return Err(ValidationError::new("empty_source_candidate"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok());
        }
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("").is_err());
    }

    #[test]
    fn test_source_candidates() {
        assert!(validate_source_candidates(&[]).is_ok());
        assert!(validate_source_candidates(&[PathBuf::from("all_data.csv")]).is_ok());
        assert!(validate_source_candidates(&[PathBuf::from("")]).is_err());
    }
}
