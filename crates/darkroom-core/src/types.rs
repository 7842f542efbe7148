//! Core data types shared across the conversion pipeline.
//!
//! `ConvertRequest` is the per-batch policy record; the remaining types make
//! up the batch outcome that the runner accumulates and the report serializes.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Conversion policy for one batch.
///
/// Built once from configuration and CLI flags, then shared read-only across
/// every file in the batch.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    /// Destination folder for transcoded and copied files.
    /// When unset, each file's own folder is used.
    pub output_folder: Option<PathBuf>,

    /// Rename files that are already JPEG but carry a non-JPEG extension
    pub fix_extension: bool,

    /// Copy already-JPEG files into the output folder instead of skipping
    /// them (only meaningful with `output_folder` set)
    pub copy_unconverted: bool,

    /// Drop the original extension from transcoded output names
    /// (`photo.CR2` becomes `photo.jpg` instead of `photo.CR2.jpg`)
    pub strip_extension: bool,
}

impl ConvertRequest {
    /// Create the output folder if one is configured.
    ///
    /// Called once before the first file is processed; a folder that cannot
    /// be created aborts the batch rather than failing file by file.
    pub fn ensure_output_folder(&self) -> Result<(), ConfigError> {
        if let Some(folder) = &self.output_folder {
            std::fs::create_dir_all(folder).map_err(|e| ConfigError::OutputFolder {
                path: folder.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// What the pipeline did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    /// Already a correctly named JPEG, nothing to do
    Skip,
    /// JPEG content under a wrong extension, renamed in its own folder
    RenameInPlace,
    /// Byte-for-byte copy into the output folder
    CopyVerbatim,
    /// Full decode and JPEG re-encode
    Transcode,
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Skip => "skip",
            Self::RenameInPlace => "rename",
            Self::CopyVerbatim => "copy",
            Self::Transcode => "transcode",
        };
        f.write_str(name)
    }
}

/// A successfully handled file.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    /// Source path as resolved by the pipeline
    pub source: PathBuf,

    /// Where the result lives (equal to `source` for skipped files)
    pub output: PathBuf,

    /// The action that produced it
    pub action: PlannedAction,
}

/// A recognized image that failed to convert.
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    /// Source path as given to the batch
    pub source: PathBuf,

    /// Full error detail for the end-of-batch summary
    pub error: String,
}

/// Aggregated result of one batch run.
///
/// Append-only while the batch runs; every input path lands in exactly one
/// of `converted`/`failed`, or bumps `unsupported` for files that were never
/// decodable images in the first place.
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    /// Successfully handled files, in input order
    pub converted: Vec<ConvertedFile>,

    /// Failed conversions, in input order
    pub failed: Vec<FailedFile>,

    /// Inputs that were not decodable images (logged, not recorded)
    pub unsupported: u64,
}

impl BatchOutcome {
    /// Total number of inputs the batch saw.
    pub fn total(&self) -> u64 {
        self.converted.len() as u64 + self.failed.len() as u64 + self.unsupported
    }
}
