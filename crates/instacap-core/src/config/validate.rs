//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

/// Largest accepted downsampling grid edge.
const MAX_SAMPLE_SIZE: u32 = 1024;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.sample_size == 0 || self.analysis.sample_size > MAX_SAMPLE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "analysis.sample_size must be between 1 and {MAX_SAMPLE_SIZE}"
            )));
        }
        if self.limits.max_input_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_input_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of: {}",
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sample_size() {
        let mut config = Config::default();
        config.analysis.sample_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sample_size"));
    }

    #[test]
    fn test_validate_rejects_oversized_sample_grid() {
        let mut config = Config::default();
        config.analysis.sample_size = 4096;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.limits.max_input_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_input_mb"));

        let mut config = Config::default();
        config.limits.max_image_dimension = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_image_dimension"));
    }

    #[test]
    fn test_validate_rejects_unknown_logging_values() {
        let mut config = Config::default();
        config.logging.level = "verbose".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));

        let mut config = Config::default();
        config.logging.format = "xml".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
