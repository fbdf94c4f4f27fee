//! Trace data model and record parsing.
//!
//! This module handles:
//! - The typed trace representation (setup + paired turns)
//! - Pairing raw records and extracting per-type fields
//! - Resolving the heterogeneous glimpse report entries

pub mod model;
pub mod parse;

// Re-export main types
pub use model::{Contract, ExploreResource, Setup, TileReport, Trace, Turn, TurnDetail};
pub use parse::parse_trace;
