//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the JSON trace file
//! 2. Pairs and types the records
//! 3. Builds the output document tree
//! 4. Writes the XML log with its presentation preamble

use crate::output::write_log;
use crate::reader::read_trace;
use crate::trace::parse_trace;
use crate::transform::build_document;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the JSON trace file
    pub input: PathBuf,

    /// Path for the XML output
    pub output: PathBuf,
}

/// Validate convert arguments before doing any work
///
/// **Public** - called from main.rs before execute_convert
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("input path is empty");
    }
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("output path is empty");
    }
    Ok(())
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * File read errors
/// * Malformed JSON or trace errors
/// * File write errors
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    info!("Converting trace: {}", args.input.display());

    // Step 1: Read the raw record array
    info!("Step 1/4: Reading trace file...");
    let records = read_trace(&args.input).context("Failed to read trace file")?;
    debug!("Read {} records", records.len());

    // Step 2: Pair and type the records
    info!("Step 2/4: Parsing records...");
    let trace = parse_trace(&records).context("Failed to parse trace records")?;
    debug!("Parsed {} turns", trace.turns.len());

    // Step 3: Build the document tree
    info!("Step 3/4: Building document...");
    let document = build_document(&trace);

    // Step 4: Write the XML log
    info!("Step 4/4: Writing XML log...");
    write_log(&document, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Done: {}", args.output.display());
    Ok(())
}
