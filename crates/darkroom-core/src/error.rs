//! Error types for the Darkroom conversion pipeline.
//!
//! Errors are organized by stage so that messages carry actionable context
//! (file paths, the operation that failed, the underlying cause).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Darkroom operations.
#[derive(Error, Debug)]
pub enum DarkroomError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors (batch report)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
///
/// These are fatal: a batch never starts with a broken configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The configured output folder could not be created
    #[error("Cannot create output folder {path}: {message}")]
    OutputFolder { path: PathBuf, message: String },
}

/// Per-file conversion errors, organized by pipeline stage.
///
/// These only cover files already recognized as images; unreadable or
/// non-image inputs are reported as unsupported, not as errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Full bitmap decode failed after a successful probe
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// JPEG encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Writing the destination file failed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// In-place rename of an already-JPEG file failed
    #[error("Cannot rename {from} to {to}: {message}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// Verbatim copy into the output folder failed
    #[error("Cannot copy {from} to {to}: {message}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },
}

/// Convenience type alias for Darkroom results.
pub type Result<T> = std::result::Result<T, DarkroomError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
