//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the input trace file
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot read input file: {0}")]
    InputNotFound(#[from] std::io::Error),

    #[error("input is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("top-level JSON value must be an array of records")]
    NotAnArray,
}

/// Errors that can occur while pairing and extracting trace records
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("trace has no setup record")]
    MissingSetup,

    #[error("setup record is malformed: {0}")]
    InvalidSetup(#[from] serde_json::Error),

    #[error("record {index} has no answer to pair with")]
    UnpairedRecord { index: usize },

    #[error("record {record} is missing required field '{field}'")]
    MissingField { record: usize, field: &'static str },

    #[error("record {record} field '{field}' is not {expected}")]
    InvalidField {
        record: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
