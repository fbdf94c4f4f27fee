//! Island Trace
//!
//! Converts recorded island exploration traces from their JSON record
//! form into structured XML log documents.
//!
//! This crate provides the core implementation for the
//! `island-trace` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install island-trace
//! island-trace trace.json
//! ```

pub mod commands;
pub mod output;
pub mod reader;
pub mod trace;
pub mod transform;
pub mod utils;
pub mod xml;
