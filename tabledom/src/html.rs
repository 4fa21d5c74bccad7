//! HTML serialization.

use crate::element::{Content, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Emit each element's id as an `id` attribute.
    pub include_ids: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            include_ids: false,
        }
    }
}

impl HtmlOptions {
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn include_ids(mut self, include_ids: bool) -> Self {
        self.include_ids = include_ids;
        self
    }
}

pub fn to_html(root: &Element) -> String {
    to_html_with(root, &HtmlOptions::default())
}

/// Serialize with one element per line. Text-only elements stay on a
/// single line (`<td>Bob</td>`), void elements self-close.
pub fn to_html_with(root: &Element, options: &HtmlOptions) -> String {
    let mut out = String::new();
    write_element(root, options, 0, &mut out);
    out
}

fn write_element(element: &Element, options: &HtmlOptions, depth: usize, out: &mut String) {
    let pad = " ".repeat(depth * options.indent);
    let name = element.tag.name();

    out.push_str(&pad);
    out.push('<');
    out.push_str(name);
    if options.include_ids {
        out.push_str(&format!(" id=\"{}\"", escape(&element.id)));
    }
    for (key, value) in &element.attributes {
        out.push_str(&format!(" {key}=\"{}\"", escape(value)));
    }

    match &element.content {
        Content::None if element.tag.is_void() => out.push_str(" />\n"),
        Content::None => out.push_str(&format!("></{name}>\n")),
        Content::Text(text) => out.push_str(&format!(">{}</{name}>\n", escape(text))),
        Content::Children(children) => {
            out.push_str(">\n");
            for child in children {
                write_element(child, options, depth + 1, out);
            }
            out.push_str(&format!("{pad}</{name}>\n"));
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
