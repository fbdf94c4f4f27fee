//! Island Trace CLI
//!
//! Converts a recorded island exploration trace (a flat JSON array of
//! setup, action and answer records) into a structured XML log document.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use island_trace::commands::{execute_convert, validate_args, ConvertArgs};
use island_trace::utils::config::DEFAULT_OUTPUT_FILE;

/// Island Trace - JSON trace to XML log converter
#[derive(Parser, Debug)]
#[command(name = "island-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON trace file
    input: PathBuf,

    /// Path for the XML output
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute conversion
    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
    };

    validate_args(&args)?;
    execute_convert(args)?;

    Ok(())
}
