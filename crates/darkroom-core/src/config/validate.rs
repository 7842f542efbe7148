//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.encoder.quality == 0 || self.encoder.quality > 100 {
            return Err(ConfigError::ValidationError(
                "encoder.quality must be between 1 and 100".into(),
            ));
        }
        if self.encoder.thumbnail_size == 0 {
            return Err(ConfigError::ValidationError(
                "encoder.thumbnail_size must be > 0".into(),
            ));
        }
        if self.conversion.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "conversion.supported_formats must not be empty".into(),
            ));
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.level must be a valid level, got \"{other}\""
                )));
            }
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.format must be \"pretty\" or \"json\", got \"{other}\""
                )));
            }
        }
        Ok(())
    }
}
