//! HTML serialization for debugging and demos.

use std::fmt::Write as _;

use crate::element::{Content, Element};

/// Serialize an element tree as indented HTML.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}<{}", el.tag.as_str());
    let _ = write!(out, " id=\"{}\"", escape(&el.id));

    if !el.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&el.classes.join(" ")));
    }

    for (key, value) in &el.attrs {
        let _ = write!(out, " {key}=\"{}\"", escape(value));
    }

    for (key, value) in &el.data {
        let _ = write!(out, " data-{key}=\"{}\"", escape(value));
    }

    match &el.content {
        Content::None => {
            let _ = writeln!(out, "></{}>", el.tag.as_str());
        }
        Content::Text(text) => {
            let _ = writeln!(out, ">{}</{}>", escape(text), el.tag.as_str());
        }
        Content::Children(children) => {
            let _ = writeln!(out, ">");
            for child in children {
                write_element(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</{}>", el.tag.as_str());
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
