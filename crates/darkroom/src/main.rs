//! Darkroom CLI - batch raster/RAW to JPEG converter.
//!
//! Darkroom takes image files (or directories of them) and converts each to
//! JPEG. Files that are already JPEG are skipped, renamed to a proper
//! extension, or copied into the output folder, depending on flags; files
//! that fail to convert are collected into a final report.
//!
//! # Usage
//!
//! ```bash
//! # Convert files next to their sources
//! darkroom convert photo.CR2 scan.png
//!
//! # Convert a folder into ./converted, fixing misnamed JPEGs
//! darkroom convert ./photos --out-dir ./converted --fix-extension
//!
//! # View configuration
//! darkroom config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Darkroom - batch raster/RAW to JPEG converter.
#[derive(Parser, Debug)]
#[command(name = "darkroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert images to JPEG
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match darkroom_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `darkroom config path`."
            );
            darkroom_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Darkroom v{}", darkroom_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Convert(args) => cli::convert::execute(config, args),
        Commands::Config(args) => cli::config::execute(args),
    }
}
