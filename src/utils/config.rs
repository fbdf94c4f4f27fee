//! Configuration and constants for the CLI.

/// Default output filename when -o/--output is not given
pub const DEFAULT_OUTPUT_FILE: &str = "output.xml";

/// Indentation unit for rendered XML
pub const INDENT: &str = "  ";

// Presentation directives injected by the writer. These are textual
// post-processing of the serialized document, never part of the tree.
pub const STYLESHEET_HREF: &str = "style/style.css";
pub const DTD_NAME: &str = "islands.dtd";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const SCRIPT_SRCS: &[&str] = &["style/jquery-3.2.1.min.js", "style/main.js"];
