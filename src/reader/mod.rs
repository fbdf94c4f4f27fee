//! Trace file reader.
//!
//! Loads the raw input file and parses it into a record array. The trace
//! is small and fully materialized; no streaming.

use crate::utils::error::ReadError;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a trace file into its raw record array
///
/// **Public** - main entry point for input
///
/// # Arguments
/// * `input_path` - path to the JSON trace file
///
/// # Returns
/// The top-level record array, in file order
///
/// # Errors
/// * `ReadError::InputNotFound` - file cannot be opened
/// * `ReadError::MalformedJson` - file is not valid JSON
/// * `ReadError::NotAnArray` - top-level value is not an array
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<Vec<Value>, ReadError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace from: {}", input_path.display());

    let file = File::open(input_path).map_err(ReadError::InputNotFound)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;

    match value {
        Value::Array(records) => {
            debug!("Trace loaded: {} records", records.len());
            Ok(records)
        }
        _ => Err(ReadError::NotAnArray),
    }
}
