//! XML log output writer.
//!
//! Renders the document tree and injects the fixed presentation
//! directives: a stylesheet processing instruction and a DOCTYPE after
//! the XML declaration, and two script-reference elements after the
//! root open tag. The directives are textual post-processing of the
//! serialized form; the document tree never contains them.

use crate::utils::config::{DTD_NAME, SCRIPT_SRCS, STYLESHEET_HREF, XHTML_NS};
use crate::utils::error::OutputError;
use crate::xml::{render_document, Element};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the log document to a file
///
/// **Public** - main entry point for XML output
///
/// # Arguments
/// * `root` - the `log` document tree
/// * `output_path` - path to the output XML file
///
/// # Returns
/// Ok if the file was written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - path is empty or a directory
pub fn write_log(root: &Element, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing XML log to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let content = render_with_preamble(root);

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("XML log written successfully ({} bytes)", content.len());

    Ok(())
}

/// Render the document with the presentation preamble inserted
///
/// **Public** - exercised directly by writer tests
pub fn render_with_preamble(root: &Element) -> String {
    let rendered = render_document(root);

    let mut preamble = format!(
        "<?xml-stylesheet type=\"text/css\" href=\"{}\"?>\n<!DOCTYPE {} SYSTEM \"{}\">\n",
        STYLESHEET_HREF,
        root.name(),
        DTD_NAME
    );
    let mut scripts = String::new();
    for src in SCRIPT_SRCS {
        scripts.push_str(&format!(
            "<script xmlns=\"{}\" src=\"{}\"></script>\n",
            XHTML_NS, src
        ));
    }

    // Splice in after the declaration line, then after the root open tag.
    let decl_end = rendered.find('\n').map_or(rendered.len(), |i| i + 1);
    let mut content = String::with_capacity(rendered.len() + preamble.len() + scripts.len());
    content.push_str(&rendered[..decl_end]);
    content.push_str(&preamble);
    content.push_str(&rendered[decl_end..]);

    let open_tag = format!("<{}>", root.name());
    if let Some(pos) = content.find(&open_tag) {
        // past the tag and its trailing newline
        content.insert_str(pos + open_tag.len() + 1, &scripts);
    }
    content
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
