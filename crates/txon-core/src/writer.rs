//! TXON writer: serializes a value tree back into TXON text.
//!
//! Every entry becomes one `name:`value`` term. Mapping entries are written in
//! case-insensitive key order, list items in sequence as anonymous terms, so
//! the same tree always produces the same text.
//!
//! # Example
//! ```
//! use txon_core::{write, Layout, Mapping, Value};
//!
//! let tree: Mapping = [("b", Value::from("2")), ("a", Value::from("1"))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(write(&Value::from(tree), Layout::Linear), "a:`1` b:`2`");
//! ```

use crate::layout::{newline_indent, Layout};
use crate::types::Value;

/// Serialize a mapping or list to TXON.
///
/// Bare text has no TXON form on its own and yields an empty string.
pub fn write(value: &Value, layout: Layout) -> String {
    if !value.is_collection() {
        return String::new();
    }
    let mut out = String::new();
    write_collection(value, layout, 0, &mut out);
    out
}

/// Emit the terms of one collection at nesting `level`.
///
/// Linear joins siblings with a space. Indented joins root siblings with a
/// newline; nested siblings each start on a fresh line indented by `level`,
/// and the sequence closes on a line indented by `level - 1`.
fn write_collection(value: &Value, layout: Layout, level: usize, out: &mut String) {
    let separator = if layout.is_linear() {
        " ".to_string()
    } else {
        newline_indent(level)
    };
    let nested_indented = level > 0 && !layout.is_linear();

    if nested_indented {
        out.push_str(&separator);
    }
    for (i, (key, item)) in value.output_entries().into_iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
        }
        write_term(key.unwrap_or(""), item, layout, level, out);
    }
    if nested_indented {
        out.push_str(&newline_indent(level - 1));
    }
}

/// Emit a single `name:`value`` term.
fn write_term(key: &str, value: &Value, layout: Layout, level: usize, out: &mut String) {
    out.push_str(&sanitize_key(key));
    out.push_str(":`");
    match value {
        Value::Text(s) => out.push_str(&escape_text(s)),
        _ => write_collection(value, layout, level + 1, out),
    }
    out.push('`');
}

/// Drop backticks and collapse each whitespace run into `_`, so the name
/// survives the reader's backward whitespace scan intact.
fn sanitize_key(key: &str) -> String {
    key.replace('`', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Escape backticks. Already-escaped backticks are normalized first so
/// escaping twice is a no-op.
fn escape_text(s: &str) -> String {
    s.replace("\\`", "`").replace('`', "\\`")
}
