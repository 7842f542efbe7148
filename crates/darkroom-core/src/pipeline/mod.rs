//! The per-file conversion pipeline and its batch driver.
//!
//! - **probe**: resolve a path and identify its codec
//! - **naming**: pure output-naming policy
//! - **convert**: execute one file's plan (skip/rename/copy/transcode)
//! - **batch**: sequential driver with isolated per-file failures
//! - **discovery**: expand directory inputs into candidate files

pub mod batch;
pub mod convert;
pub mod discovery;
pub mod naming;
pub mod probe;

// Re-exports for convenient access
pub use batch::BatchRunner;
pub use convert::{ConvertOutcome, Converter};
pub use discovery::FileDiscovery;
pub use naming::{plan, OutputPlan};
pub use probe::{CodecIdentity, ProbedImage};
