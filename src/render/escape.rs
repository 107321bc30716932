//! Attribute escaping

use serde::Serialize;

/// Escape a value for use inside a double-quoted HTML/SVG attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Serialize to JSON and escape it for a double-quoted attribute, e.g.
/// `<input value="{htmlify_json(obj)}">`
pub fn htmlify_json<T: Serialize + ?Sized>(value: &T) -> String {
    escape_attr(&serde_json::to_string(value).unwrap_or_default())
}
