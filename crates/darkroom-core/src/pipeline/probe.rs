//! Path resolution and format probing for one input file.

use image::ImageFormat;
use std::path::{Path, PathBuf};

use crate::codec::{ImageCodec, ProbeError};

/// Which codec family a probed file belongs to.
///
/// The pipeline only branches on JPEG-vs-everything-else; the concrete
/// format is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecIdentity {
    /// The stream is already JPEG-encoded
    Jpeg,
    /// Any other decodable format; transcoding is required
    Other(ImageFormat),
}

impl CodecIdentity {
    pub fn is_jpeg(&self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// A resolved input file with its detected codec identity.
///
/// Owned by a single `convert_one` call; the decoded bitmap is materialized
/// separately and only on the transcode path.
#[derive(Debug, Clone)]
pub struct ProbedImage {
    /// Resolved absolute path
    pub path: PathBuf,

    /// Full file name, extension included
    pub file_name: String,

    /// File name with the extension stripped
    pub stem: String,

    /// Original extension, lowercased, without the dot; empty if none
    pub extension: String,

    /// Detected codec identity
    pub identity: CodecIdentity,
}

/// Resolve `path` and probe its container format.
///
/// Any resolution or probe failure means the input is not a convertible
/// image; the caller reports it as unsupported, never as a batch error.
pub fn probe_image(codec: &ImageCodec, path: &Path) -> Result<ProbedImage, ProbeError> {
    let resolved = std::fs::canonicalize(path).map_err(ProbeError::Open)?;
    if !resolved.is_file() {
        return Err(ProbeError::Unrecognized(
            "not a regular file".to_string(),
        ));
    }

    let format = codec.probe(&resolved)?;
    let identity = if format == ImageCodec::JPEG {
        CodecIdentity::Jpeg
    } else {
        CodecIdentity::Other(format)
    };

    let file_name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = resolved
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    let extension = resolved
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    Ok(ProbedImage {
        path: resolved,
        file_name,
        stem,
        extension,
        identity,
    })
}
