//! Output document tree and serialization.

pub mod element;

// Re-export main types
pub use element::{render_document, Element};
