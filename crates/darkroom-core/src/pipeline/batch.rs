//! Batch orchestration: sequential conversion with isolated failures.

use std::path::PathBuf;

use crate::types::{BatchOutcome, ConvertedFile, FailedFile};

use super::convert::{ConvertOutcome, Converter};

/// Runs a converter over an ordered list of input paths.
///
/// Files are processed strictly one at a time, in input order; a failure is
/// recorded and the batch moves on. One status line is logged per file.
pub struct BatchRunner {
    converter: Converter,
}

impl BatchRunner {
    pub fn new(converter: Converter) -> Self {
        Self { converter }
    }

    /// Convert every path in order and aggregate the outcome.
    pub fn run(&self, paths: &[PathBuf]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for path in paths {
            match self.converter.convert_one(path) {
                ConvertOutcome::Converted {
                    source,
                    output,
                    action,
                } => {
                    tracing::info!("{} -> {} [{action}]", source.display(), output.display());
                    outcome.converted.push(ConvertedFile {
                        source,
                        output,
                        action,
                    });
                }
                ConvertOutcome::Unsupported { source, reason } => {
                    tracing::warn!("{}: skipped, {reason}", source.display());
                    outcome.unsupported += 1;
                }
                ConvertOutcome::Failed { source, error } => {
                    tracing::error!("{}: {error}", source.display());
                    outcome.failed.push(FailedFile {
                        source,
                        error: error.to_string(),
                    });
                }
            }
        }

        outcome
    }
}
