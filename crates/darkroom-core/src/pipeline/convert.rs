//! Per-file conversion: probe, plan, execute.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codec::ImageCodec;
use crate::error::PipelineError;
use crate::types::{ConvertRequest, PlannedAction};

use super::naming::{self, OutputPlan};
use super::probe::{probe_image, ProbedImage};

/// How one file fared.
#[derive(Debug)]
pub enum ConvertOutcome {
    /// The planned action completed; `output` is where the result lives
    Converted {
        source: PathBuf,
        output: PathBuf,
        action: PlannedAction,
    },

    /// Not a convertible image; excluded from the batch's success/failure
    /// records
    Unsupported { source: PathBuf, reason: String },

    /// A recognized image that failed during conversion
    Failed {
        source: PathBuf,
        error: PipelineError,
    },
}

/// Converts one file at a time according to a fixed request.
pub struct Converter {
    codec: ImageCodec,
    request: ConvertRequest,
}

impl Converter {
    /// Create a converter for one batch's policy.
    pub fn new(codec: ImageCodec, request: ConvertRequest) -> Self {
        Self { codec, request }
    }

    pub fn request(&self) -> &ConvertRequest {
        &self.request
    }

    /// Run the full pipeline for a single file.
    ///
    /// Never panics and never propagates an error: every exit is one of the
    /// three outcome variants, and every handle opened here is dropped
    /// before returning.
    pub fn convert_one(&self, path: &Path) -> ConvertOutcome {
        let probed = match probe_image(&self.codec, path) {
            Ok(probed) => probed,
            Err(e) => {
                return ConvertOutcome::Unsupported {
                    source: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        };

        let plan = naming::plan(&probed, &self.request);
        tracing::debug!(
            "{}: {:?} -> {} ({})",
            probed.file_name,
            probed.identity,
            plan.file_name,
            plan.action
        );

        match self.execute(&probed, &plan) {
            Ok(output) => ConvertOutcome::Converted {
                source: probed.path,
                output,
                action: plan.action,
            },
            Err(error) => ConvertOutcome::Failed {
                source: probed.path,
                error,
            },
        }
    }

    fn execute(&self, probed: &ProbedImage, plan: &OutputPlan) -> Result<PathBuf, PipelineError> {
        let destination = plan.destination();
        match plan.action {
            PlannedAction::Skip => Ok(probed.path.clone()),

            PlannedAction::RenameInPlace => {
                std::fs::rename(&probed.path, &destination).map_err(|e| {
                    PipelineError::Rename {
                        from: probed.path.clone(),
                        to: destination.clone(),
                        message: e.to_string(),
                    }
                })?;
                Ok(destination)
            }

            PlannedAction::CopyVerbatim => {
                std::fs::copy(&probed.path, &destination).map_err(|e| PipelineError::Copy {
                    from: probed.path.clone(),
                    to: destination.clone(),
                    message: e.to_string(),
                })?;
                Ok(destination)
            }

            PlannedAction::Transcode => {
                // Pixel data is only materialized now; probing never loads it.
                let image = self.codec.decode(&probed.path)?;

                let file = File::create(&destination).map_err(|e| PipelineError::Write {
                    path: destination.clone(),
                    message: e.to_string(),
                })?;
                let mut writer = BufWriter::new(file);
                self.codec.encode_jpeg(&image, &mut writer, &destination)?;
                writer.flush().map_err(|e| PipelineError::Write {
                    path: destination.clone(),
                    message: e.to_string(),
                })?;
                Ok(destination)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncoderConfig;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn write_fixture(path: &Path, format: ImageFormat) {
        let img = DynamicImage::new_rgb8(20, 10);
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, format).unwrap();
        std::fs::write(path, buffer.into_inner()).unwrap();
    }

    fn converter(request: ConvertRequest) -> Converter {
        Converter::new(ImageCodec::new(EncoderConfig::default()), request)
    }

    #[test]
    fn test_transcode_png_next_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.png");
        write_fixture(&source, ImageFormat::Png);

        let outcome = converter(ConvertRequest::default()).convert_one(&source);
        match outcome {
            ConvertOutcome::Converted { output, action, .. } => {
                assert_eq!(action, PlannedAction::Transcode);
                assert!(output.ends_with("a.png.jpg"));
                let decoded = image::open(&output).unwrap();
                assert_eq!(decoded.width(), 20);
            }
            other => panic!("expected transcode, got {other:?}"),
        }
        // Source is left alone
        assert!(source.exists());
    }

    #[test]
    fn test_skip_leaves_filesystem_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("pic.jpg");
        write_fixture(&source, ImageFormat::Jpeg);
        let before = std::fs::read(&source).unwrap();

        let outcome = converter(ConvertRequest::default()).convert_one(&source);
        match outcome {
            ConvertOutcome::Converted { output, action, .. } => {
                assert_eq!(action, PlannedAction::Skip);
                assert_eq!(output, std::fs::canonicalize(&source).unwrap());
            }
            other => panic!("expected skip, got {other:?}"),
        }
        assert_eq!(std::fs::read(&source).unwrap(), before);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_rename_fixes_extension() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("pic.jpeg");
        write_fixture(&source, ImageFormat::Jpeg);

        let request = ConvertRequest {
            fix_extension: true,
            ..Default::default()
        };
        // .jpeg is already a correct JPEG extension: skip
        let outcome = converter(request.clone()).convert_one(&source);
        assert!(matches!(
            outcome,
            ConvertOutcome::Converted {
                action: PlannedAction::Skip,
                ..
            }
        ));

        // A wrong extension gets renamed
        let misnamed = dir.path().join("pic.dat");
        write_fixture(&misnamed, ImageFormat::Jpeg);
        let outcome = converter(request).convert_one(&misnamed);
        match outcome {
            ConvertOutcome::Converted { output, action, .. } => {
                assert_eq!(action, PlannedAction::RenameInPlace);
                // The plan folder comes from the canonicalized source path
                let expected = std::fs::canonicalize(dir.path()).unwrap().join("pic.jpg");
                assert_eq!(output, expected);
                assert!(!misnamed.exists());
                assert!(output.exists());
            }
            other => panic!("expected rename, got {other:?}"),
        }
    }

    #[test]
    fn test_copy_unconverted_into_output_folder() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        let source = dir.path().join("pic.jpg");
        write_fixture(&source, ImageFormat::Jpeg);

        let request = ConvertRequest {
            output_folder: Some(out.clone()),
            copy_unconverted: true,
            ..Default::default()
        };
        let outcome = converter(request).convert_one(&source);
        match outcome {
            ConvertOutcome::Converted { output, action, .. } => {
                assert_eq!(action, PlannedAction::CopyVerbatim);
                assert_eq!(output, out.join("pic.jpg"));
                assert_eq!(
                    std::fs::read(&output).unwrap(),
                    std::fs::read(&source).unwrap()
                );
            }
            other => panic!("expected copy, got {other:?}"),
        }
        assert!(source.exists());
    }

    #[test]
    fn test_text_file_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("b.txt");
        std::fs::write(&source, "plain text, long enough to sniff").unwrap();

        let outcome = converter(ConvertRequest::default()).convert_one(&source);
        assert!(matches!(outcome, ConvertOutcome::Unsupported { .. }));
    }

    #[test]
    fn test_missing_file_is_unsupported() {
        let outcome =
            converter(ConvertRequest::default()).convert_one(Path::new("/no/such/file.png"));
        assert!(matches!(outcome, ConvertOutcome::Unsupported { .. }));
    }

    #[test]
    fn test_transcode_overwrites_on_second_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.png");
        write_fixture(&source, ImageFormat::Png);
        let converter = converter(ConvertRequest::default());

        let first = converter.convert_one(&source);
        let first_output = match first {
            ConvertOutcome::Converted { output, .. } => output,
            other => panic!("expected success, got {other:?}"),
        };

        let second = converter.convert_one(&source);
        match second {
            ConvertOutcome::Converted { output, action, .. } => {
                assert_eq!(action, PlannedAction::Transcode);
                assert_eq!(output, first_output);
            }
            other => panic!("expected success, got {other:?}"),
        }
        // One source, one destination; no duplicates
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_blocked_destination_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.png");
        write_fixture(&source, ImageFormat::Png);

        // The "folder" is actually a file, so creating the destination fails
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"file in the way").unwrap();
        let request = ConvertRequest {
            output_folder: Some(blocked),
            ..Default::default()
        };

        let outcome = converter(request).convert_one(&source);
        match outcome {
            ConvertOutcome::Failed { source: failed, error } => {
                assert_eq!(failed, std::fs::canonicalize(&source).unwrap());
                assert!(matches!(error, PipelineError::Write { .. }));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
