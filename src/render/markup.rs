//! Markup Renderer
//!
//! Serializes a view tree into nested `<div>` elements, one per node, with
//! the identity's class name and the node's escaped label as text content.

use crate::domain::view_node::ViewNode;

const INDENT: &str = "  ";

/// Render `node` and its descendants as indented markup
pub fn to_markup(node: &ViewNode) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out
}

fn write_node(node: &ViewNode, level: usize, out: &mut String) {
    let pad = INDENT.repeat(level);
    out.push_str(&pad);
    out.push_str("<div class=\"");
    out.push_str(node.id().class_name());
    out.push_str("\">");

    if let Some(label) = node.label() {
        out.push_str(&escape(label));
    }

    if !node.is_leaf() {
        out.push('\n');
        for child in node.children() {
            write_node(child, level + 1, out);
        }
        out.push_str(&pad);
    }

    out.push_str("</div>\n");
}

/// Escape text for use inside an element body
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
