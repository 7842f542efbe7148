//! Configuration management for Darkroom.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; every section implements `Default` so a missing file is not an
//! error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Darkroom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Naming and skip policy
    pub conversion: ConversionConfig,

    /// JPEG encoder settings
    pub encoder: EncoderConfig,

    /// Output destination settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.darkroom.darkroom/config.toml
    /// - Linux: ~/.config/darkroom/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\darkroom\config\config.toml
    ///
    /// Falls back to ~/.darkroom/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "darkroom", "darkroom")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".darkroom").join("config.toml")
            })
    }

    /// Get the configured output folder with `~` expansion, if one is set.
    pub fn output_folder(&self) -> Option<PathBuf> {
        self.output.folder.as_ref().map(|folder| {
            let binding = folder.to_string_lossy().into_owned();
            let expanded = shellexpand::tilde(&binding);
            PathBuf::from(expanded.into_owned())
        })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.encoder.quality, 85);
        assert!(config.encoder.embed_thumbnail);
        assert!(!config.conversion.fix_extension);
        assert!(config.output.folder.is_none());
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[conversion]"));
        assert!(toml.contains("[encoder]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_load_from_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.encoder.quality = 70;
        config.conversion.fix_extension = true;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.encoder.quality, 70);
        assert!(loaded.conversion.fix_extension);
    }

    #[test]
    fn test_load_from_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[encoder]\nquality = 92\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.encoder.quality, 92);
        assert_eq!(loaded.encoder.thumbnail_size, 160);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_output_folder_tilde_expansion() {
        let mut config = Config::default();
        config.output.folder = Some(PathBuf::from("~/converted"));
        let folder = config.output_folder().unwrap();
        assert!(!folder.to_string_lossy().starts_with('~'));
    }
}
