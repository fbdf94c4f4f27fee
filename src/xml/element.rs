//! Immutable XML element tree and indented renderer.
//!
//! Elements are built bottom-up with a chaining builder API and appended
//! into parents by value, so every subtree can be constructed and compared
//! in isolation. Rendering produces indented UTF-8 text with an XML
//! declaration; escaping covers the five predefined entities.

use crate::utils::config::INDENT;

/// One XML element: name, attributes, optional text content, children
///
/// **Public** - the output document type handed from transform to writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style)
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set text content (builder style)
    #[must_use]
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    /// Append one child element (builder style)
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append every element from an iterator (builder style)
    #[must_use]
    pub fn children(mut self, iter: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(iter);
        self
    }

    /// Tag name accessor
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute lookup by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content accessor
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements accessor
    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Children with a given tag name
    pub fn find_all<'a, 'b>(
        &'a self,
        name: &'b str,
    ) -> impl Iterator<Item = &'a Element> + use<'a, 'b> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child with a given tag name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.find_all(name).next()
    }

    /// Render this element and its subtree as an indented fragment
    ///
    /// **Public** - also used directly by tests to inspect subtrees
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    /// Render recursively at the given indentation depth
    ///
    /// **Private** - internal rendering logic
    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }

        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');

        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        if !self.children.is_empty() {
            out.push('\n');
            for child in &self.children {
                child.render_into(out, depth + 1);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }
}

/// Render a complete document: XML declaration plus the root subtree
///
/// **Public** - entry point used by the writer
pub fn render_document(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    root.render_into(&mut out, 0);
    out
}

/// Escape the five predefined XML entities
///
/// **Private** - internal utility
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_element_self_closes() {
        let el = Element::new("extras");
        assert_eq!(el.render(), "<extras/>\n");
    }

    #[test]
    fn test_render_text_element_single_line() {
        let el = Element::new("cost").text("3");
        assert_eq!(el.render(), "<cost>3</cost>\n");
    }

    #[test]
    fn test_render_nested_indentation() {
        let el = Element::new("contract")
            .child(Element::new("amount").text("600"))
            .child(Element::new("resource").attr("name", "WOOD"));
        assert_eq!(
            el.render(),
            "<contract>\n  <amount>600</amount>\n  <resource name=\"WOOD\"/>\n</contract>\n"
        );
    }

    #[test]
    fn test_escape_attribute_and_text() {
        let el = Element::new("found").attr("note", "a\"b<c").text("x & y");
        assert_eq!(
            el.render(),
            "<found note=\"a&quot;b&lt;c\">x &amp; y</found>\n"
        );
    }

    #[test]
    fn test_render_document_declaration() {
        let doc = render_document(&Element::new("log").child(Element::new("actions")));
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<log>\n"));
        assert!(doc.ends_with("</log>\n"));
    }

    #[test]
    fn test_find_and_attribute_accessors() {
        let el = Element::new("turn")
            .child(Element::new("action").attr("type", "scan"))
            .child(Element::new("answer").attr("status", "ok"));
        assert_eq!(el.find("action").unwrap().attribute("type"), Some("scan"));
        assert_eq!(el.find_all("answer").count(), 1);
        assert!(el.find("missing").is_none());
    }
}
