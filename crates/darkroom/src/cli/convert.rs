//! The `darkroom convert` command.

use clap::{Args, ValueEnum};
use console::style;
use darkroom_core::{
    BatchOutcome, BatchRunner, Config, ConvertRequest, Converter, FileDiscovery, ImageCodec,
    ReportFormat as CoreReportFormat, ReportWriter,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image files or directories to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Destination folder for transcoded and copied files
    /// (defaults to each file's own folder)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Rename already-JPEG files that carry a non-JPEG extension
    #[arg(long)]
    pub fix_extension: bool,

    /// Copy already-JPEG files into the output folder instead of skipping them
    #[arg(long)]
    pub copy_unconverted: bool,

    /// Drop the original extension from transcoded output names
    #[arg(long)]
    pub strip_extension: bool,

    /// JPEG quality (1-100)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Disable the embedded thumbnail in transcoded output
    #[arg(long)]
    pub no_thumbnail: bool,

    /// Write a machine-readable report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    pub report_format: ReportFormat,
}

/// Report format flag.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ReportFormat {
    Json,
    Jsonl,
}

impl From<ReportFormat> for CoreReportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => CoreReportFormat::Json,
            ReportFormat::Jsonl => CoreReportFormat::JsonLines,
        }
    }
}

/// Execute the convert command.
pub fn execute(config: Config, args: ConvertArgs) -> anyhow::Result<()> {
    let mut encoder = config.encoder.clone();
    if let Some(quality) = args.quality {
        anyhow::ensure!(
            (1..=100).contains(&quality),
            "--quality must be between 1 and 100"
        );
        encoder.quality = quality;
    }
    if args.no_thumbnail {
        encoder.embed_thumbnail = false;
    }

    let request = ConvertRequest {
        output_folder: args.out_dir.clone().or_else(|| config.output_folder()),
        fix_extension: args.fix_extension || config.conversion.fix_extension,
        copy_unconverted: args.copy_unconverted || config.conversion.copy_unconverted,
        strip_extension: args.strip_extension || config.conversion.strip_extension,
    };
    // Fail fast: the batch never starts without a usable output folder.
    request.ensure_output_folder()?;

    let files = collect_inputs(&args.inputs, &config);
    if files.is_empty() {
        tracing::warn!("No image files found in the given inputs");
        return Ok(());
    }
    tracing::info!("Converting {} file(s)", files.len());

    let converter = Converter::new(ImageCodec::new(encoder), request);
    let outcome = BatchRunner::new(converter).run(&files);

    print_summary(&outcome);

    if let Some(report_path) = &args.report {
        let file = File::create(report_path)?;
        let mut writer = ReportWriter::new(BufWriter::new(file), args.report_format.into());
        writer.write(&outcome)?;
        writer.flush()?;
        tracing::info!("Report written to {:?}", report_path);
    }

    Ok(())
}

/// Expand directory inputs through discovery; file inputs pass through
/// untouched, in the order given.
fn collect_inputs(inputs: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let discovery = FileDiscovery::new(config.conversion.clone());
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(discovery.discover(input));
        } else {
            // The pipeline decides whether a plain path is convertible;
            // no existence pre-filtering here.
            files.push(input.clone());
        }
    }
    files
}

/// Print the end-of-batch summary and the failure block, if any.
fn print_summary(outcome: &BatchOutcome) {
    println!(
        "{} file(s): {} converted, {} failed, {} unsupported",
        outcome.total(),
        outcome.converted.len(),
        outcome.failed.len(),
        outcome.unsupported
    );

    if !outcome.failed.is_empty() {
        println!();
        println!("{}", style("Failed conversions:").red().bold());
        for failure in &outcome.failed {
            println!(
                "  {}: {}",
                style(failure.source.display()).red(),
                failure.error
            );
        }
    }
}
