//! Codec service: the adapter between the pipeline and the `image` crate.
//!
//! The pipeline only ever talks to `ImageCodec`: identify a file's container
//! format without touching pixel data, decode the full bitmap, and encode a
//! bitmap as baseline JPEG with an optional embedded thumbnail.

pub mod sniff;
pub mod thumbnail;

use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::config::EncoderConfig;
use crate::error::PipelineError;

/// Why a file could not be probed as an image.
///
/// Probe failures are not batch errors: a heterogeneous input list
/// legitimately contains files that are not images at all.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The file could not be opened or read
    #[error("cannot open: {0}")]
    Open(std::io::Error),

    /// The bytes do not match any known image container
    #[error("not a recognized image: {0}")]
    Unrecognized(String),
}

/// Adapter over the `image` crate's decoders and JPEG encoder.
pub struct ImageCodec {
    encoder: EncoderConfig,
}

impl ImageCodec {
    /// Codec identity of JPEG streams, for already-JPEG detection.
    pub const JPEG: ImageFormat = ImageFormat::Jpeg;

    /// Create a codec with the given encoder settings.
    pub fn new(encoder: EncoderConfig) -> Self {
        Self { encoder }
    }

    /// Identify the container format by content, without decoding pixels.
    ///
    /// A cheap magic-byte check runs first so that arbitrary non-image files
    /// are rejected with a clear reason before the decoder sees them.
    pub fn probe(&self, path: &Path) -> Result<ImageFormat, ProbeError> {
        sniff::check(path)?;
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(ProbeError::Open)?;
        reader
            .format()
            .ok_or_else(|| ProbeError::Unrecognized("unknown container format".to_string()))
    }

    /// Decode the full bitmap.
    ///
    /// Only called on the transcode path; probing never loads pixel data.
    pub fn decode(&self, path: &Path) -> Result<DynamicImage, PipelineError> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Encode `image` as baseline JPEG into `writer`.
    ///
    /// When thumbnail embedding is enabled, an EXIF APP1 segment with a small
    /// JPEG rendition is spliced in right after the SOI marker. `dest` is
    /// only used to tag errors.
    pub fn encode_jpeg<W: Write>(
        &self,
        image: &DynamicImage,
        writer: &mut W,
        dest: &Path,
    ) -> Result<(), PipelineError> {
        let main = self.encode_baseline(image, dest)?;

        let segment = if self.encoder.embed_thumbnail {
            thumbnail::exif_segment(image, self.encoder.thumbnail_size)
        } else {
            None
        };

        let write_err = |e: std::io::Error| PipelineError::Write {
            path: dest.to_path_buf(),
            message: e.to_string(),
        };
        match segment {
            Some(segment) => {
                // SOI marker, then APP1, then the rest of the encoded stream.
                writer.write_all(&main[..2]).map_err(write_err)?;
                writer.write_all(&segment).map_err(write_err)?;
                writer.write_all(&main[2..]).map_err(write_err)?;
            }
            None => writer.write_all(&main).map_err(write_err)?,
        }
        Ok(())
    }

    fn encode_baseline(
        &self,
        image: &DynamicImage,
        dest: &Path,
    ) -> Result<Vec<u8>, PipelineError> {
        // JPEG has no alpha channel; flatten everything to 8-bit RGB.
        let rgb = image.to_rgb8();
        let mut buffer = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, self.encoder.quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| PipelineError::Encode {
                path: dest.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(buffer)
    }
}
