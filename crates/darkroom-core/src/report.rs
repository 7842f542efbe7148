//! Batch report formatting for JSON and JSONL output.
//!
//! The report is the machine-readable counterpart of the end-of-batch
//! summary: one record per converted or failed file.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::{BatchOutcome, ConvertedFile, FailedFile};

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Single JSON document
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl ReportFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// One line of a JSONL report.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ReportRecord<'a> {
    Converted(&'a ConvertedFile),
    Failed(&'a FailedFile),
}

/// A writer that serializes a batch outcome to JSON or JSONL.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer over `writer`.
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    /// Write the whole outcome.
    ///
    /// JSON emits the outcome as a single pretty-printed document; JSONL
    /// emits one status-tagged record per file, converted first, failed
    /// after, each group in input order.
    pub fn write(&mut self, outcome: &BatchOutcome) -> io::Result<()> {
        match self.format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, outcome)
                    .map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
            ReportFormat::JsonLines => {
                for file in &outcome.converted {
                    self.write_record(&ReportRecord::Converted(file))?;
                }
                for file in &outcome.failed {
                    self.write_record(&ReportRecord::Failed(file))?;
                }
            }
        }
        Ok(())
    }

    fn write_record(&mut self, record: &ReportRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record).map_err(io::Error::other)?;
        writeln!(self.writer)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlannedAction;
    use std::path::PathBuf;

    fn sample_outcome() -> BatchOutcome {
        BatchOutcome {
            converted: vec![ConvertedFile {
                source: PathBuf::from("/in/a.png"),
                output: PathBuf::from("/out/a.png.jpg"),
                action: PlannedAction::Transcode,
            }],
            failed: vec![FailedFile {
                source: PathBuf::from("/in/c.heic"),
                error: "disk full".to_string(),
            }],
            unsupported: 1,
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("JSONL"), Some(ReportFormat::JsonLines));
        assert_eq!(ReportFormat::parse("ndjson"), Some(ReportFormat::JsonLines));
        assert_eq!(ReportFormat::parse("yaml"), None);
    }

    #[test]
    fn test_json_report_is_one_document() {
        let mut writer = ReportWriter::new(Vec::new(), ReportFormat::Json);
        writer.write(&sample_outcome()).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["converted"][0]["action"], "transcode");
        assert_eq!(value["failed"][0]["error"], "disk full");
        assert_eq!(value["unsupported"], 1);
    }

    #[test]
    fn test_jsonl_report_tags_each_line() {
        let mut writer = ReportWriter::new(Vec::new(), ReportFormat::JsonLines);
        writer.write(&sample_outcome()).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["status"], "converted");
        assert_eq!(lines[1]["status"], "failed");
    }
}
