//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Naming and skip policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Rename already-JPEG files that carry a non-JPEG extension
    pub fix_extension: bool,

    /// Copy already-JPEG files into the output folder instead of skipping
    pub copy_unconverted: bool,

    /// Drop the original extension from transcoded output names
    pub strip_extension: bool,

    /// Extensions considered image candidates during directory expansion
    pub supported_formats: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            fix_extension: false,
            copy_unconverted: false,
            strip_extension: false,
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
                "gif".to_string(),
                "bmp".to_string(),
                "tiff".to_string(),
                "tif".to_string(),
                "avif".to_string(),
                "heic".to_string(),
                "cr2".to_string(),
                "nef".to_string(),
                "arw".to_string(),
            ],
        }
    }
}

/// JPEG encoder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Baseline JPEG quality (1-100)
    pub quality: u8,

    /// Embed a small EXIF thumbnail in transcoded output
    pub embed_thumbnail: bool,

    /// Thumbnail size in pixels (longest edge)
    pub thumbnail_size: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quality: 85,
            embed_thumbnail: true,
            thumbnail_size: 160,
        }
    }
}

/// Output destination settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default destination folder; CLI `--out-dir` overrides.
    /// When unset, results land next to their sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats_cover_raw_extensions() {
        let config = ConversionConfig::default();
        for ext in ["cr2", "nef", "arw"] {
            assert!(config.supported_formats.iter().any(|f| f == ext));
        }
    }

    #[test]
    fn test_encoder_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.quality, 85);
        assert_eq!(config.thumbnail_size, 160);
        assert!(config.embed_thumbnail);
    }
}
