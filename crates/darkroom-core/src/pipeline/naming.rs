//! Output naming policy.
//!
//! `plan` is a pure, total function from a probed file and the batch policy
//! to an output plan. It performs no I/O and never fails; every filesystem
//! consequence is decided here and executed elsewhere.

use std::path::PathBuf;

use crate::types::{ConvertRequest, PlannedAction};

use super::probe::ProbedImage;

/// Where one file's result goes and how it gets there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Destination folder
    pub folder: PathBuf,

    /// Destination file name
    pub file_name: String,

    /// The action that produces it
    pub action: PlannedAction,
}

impl OutputPlan {
    /// Full destination path.
    pub fn destination(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }
}

/// Compute the output plan for one probed file.
pub fn plan(probed: &ProbedImage, request: &ConvertRequest) -> OutputPlan {
    let source_folder = probed
        .path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let target_folder = request
        .output_folder
        .clone()
        .unwrap_or_else(|| source_folder.clone());

    if !probed.identity.is_jpeg() {
        let base = if request.strip_extension {
            &probed.stem
        } else {
            &probed.file_name
        };
        return OutputPlan {
            folder: target_folder,
            file_name: jpg_target_name(base),
            action: PlannedAction::Transcode,
        };
    }

    // Already JPEG: at most a rename or a verbatim copy.
    let needs_fix = request.fix_extension && !has_jpeg_extension(&probed.extension);
    let file_name = if needs_fix {
        format!("{}.jpg", probed.stem)
    } else {
        probed.file_name.clone()
    };

    if request.copy_unconverted && request.output_folder.is_some() {
        // The user asked for every file to land in the output folder;
        // copying wins over an in-place rename.
        OutputPlan {
            folder: target_folder,
            file_name,
            action: PlannedAction::CopyVerbatim,
        }
    } else if needs_fix {
        OutputPlan {
            folder: source_folder,
            file_name,
            action: PlannedAction::RenameInPlace,
        }
    } else {
        OutputPlan {
            folder: source_folder,
            file_name,
            action: PlannedAction::Skip,
        }
    }
}

fn has_jpeg_extension(extension: &str) -> bool {
    extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg")
}

/// Append `.jpg` to `base`, replacing an existing `.jpg`/`.jpeg` suffix so
/// the result never carries a doubled JPEG extension.
fn jpg_target_name(base: &str) -> String {
    let lower = base.to_ascii_lowercase();
    for suffix in [".jpg", ".jpeg"] {
        if let Some(stripped) = lower.strip_suffix(suffix) {
            return format!("{}.jpg", &base[..stripped.len()]);
        }
    }
    format!("{base}.jpg")
}
