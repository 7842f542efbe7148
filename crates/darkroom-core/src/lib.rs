//! Darkroom Core - batch image-to-JPEG conversion library.
//!
//! Darkroom takes a list of raster/RAW image files and converts each of them
//! to JPEG: files that need transcoding are decoded and re-encoded, files
//! that are already JPEG are skipped, renamed, or copied according to the
//! naming policy, and files that are not images at all are reported as
//! unsupported without failing the batch.
//!
//! # Architecture
//!
//! ```text
//! Paths → Probe → Classify (JPEG / other) → Naming Policy → Skip
//!                                                          | Rename
//!                                                          | Copy
//!                                                          | Decode → Encode JPEG
//! ```
//!
//! Processing is strictly sequential; one broken file never aborts the rest
//! of the batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use darkroom_core::{BatchRunner, Config, Converter, ConvertRequest, ImageCodec};
//!
//! fn main() -> darkroom_core::Result<()> {
//!     let config = Config::load()?;
//!     let request = ConvertRequest::default();
//!     request.ensure_output_folder()?;
//!
//!     let converter = Converter::new(ImageCodec::new(config.encoder.clone()), request);
//!     let outcome = BatchRunner::new(converter).run(&paths);
//!     println!("{} converted, {} failed", outcome.converted.len(), outcome.failed.len());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use codec::{ImageCodec, ProbeError};
pub use config::Config;
pub use error::{ConfigError, DarkroomError, PipelineError, PipelineResult, Result};
pub use pipeline::{BatchRunner, CodecIdentity, ConvertOutcome, Converter, FileDiscovery, ProbedImage};
pub use report::{ReportFormat, ReportWriter};
pub use types::{BatchOutcome, ConvertRequest, ConvertedFile, FailedFile, PlannedAction};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
