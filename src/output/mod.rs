//! Output writers for the converted document.

pub mod xml;

// Re-export main functions
pub use xml::{render_with_preamble, write_log};
