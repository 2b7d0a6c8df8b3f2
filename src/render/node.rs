//! The render tree.
//!
//! Renderers produce [`RenderNode`] trees; the CLI serializes them to
//! JSON or flattens them to HTML. Attribute and style maps preserve
//! insertion order so output is deterministic.

use indexmap::IndexMap;
use serde::Serialize;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// One element in a render tree.
///
/// Tag and attribute names come from the renderers and are emitted
/// as-is; text and attribute values are escaped when flattening to
/// HTML. Text precedes children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    /// Element tag, e.g. `"section"`.
    pub tag: String,

    /// Text content, before any children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Attributes, in insertion order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,

    /// Inline style properties, in insertion order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub style: IndexMap<String, String>,

    /// Child elements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attrs: IndexMap::new(),
            style: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Adds an inline style property.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends children from an iterator.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a child only when `value` is present; the closure maps
    /// the value to the child. Keeps optional-field renderers flat.
    #[must_use]
    pub fn child_if<T>(self, value: Option<T>, build: impl FnOnce(T) -> Self) -> Self {
        match value {
            Some(value) => self.child(build(value)),
            None => self,
        }
    }

    /// Flattens the tree to HTML with escaped text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }

        if !self.style.is_empty() {
            out.push_str(" style=\"");
            for (i, (property, value)) in self.style.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(property);
                out.push_str(": ");
                escape_into(out, value);
            }
            out.push('"');
        }

        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            escape_into(out, text);
        }
        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_into(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
