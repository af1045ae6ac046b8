//! JSON serializer for TXON value trees.
//!
//! Walks the tree in the same order as the TXON writer: mapping keys sorted
//! case-insensitively, list items in sequence. Every leaf is emitted as a JSON
//! string, since TXON carries no other scalar types.
//!
//! Layouts:
//!
//! ```text
//! Linear:    { "a":"1", "b":[ "x", "y" ] }
//!
//! Indented:  {
//!              "a":"1",
//!              "b":
//!              [
//!                "x",
//!                "y"
//!              ]
//!            }
//! ```
//!
//! String escaping is deliberately minimal: an already-escaped `\"` is
//! normalized and every `"` is escaped. Backslashes and control characters
//! pass through untouched, so text containing them may not produce strictly
//! valid JSON.

use crate::layout::{newline_indent, Layout};
use crate::types::Value;

/// Serialize a value tree to JSON text.
pub fn to_json(value: &Value, layout: Layout) -> String {
    let mut out = String::new();
    match value {
        Value::Text(s) => push_quoted(s, &mut out),
        _ => write_collection(value, layout, 0, &mut out),
    }
    out
}

/// Punctuation for one collection at one nesting level.
struct Delimiters {
    /// Between `"key":` and a nested collection value.
    pairing: String,
    open: String,
    between: String,
    close: String,
}

impl Delimiters {
    fn new(value: &Value, layout: Layout, level: usize) -> Self {
        let (open, close) = match value {
            Value::Mapping(_) => ('{', '}'),
            _ => ('[', ']'),
        };
        if layout.is_linear() {
            Self {
                pairing: String::new(),
                open: format!("{open} "),
                between: ", ".to_string(),
                close: format!(" {close}"),
            }
        } else {
            let inner = newline_indent(level + 1);
            Self {
                pairing: inner.clone(),
                open: format!("{open}{inner}"),
                between: format!(",{inner}"),
                close: format!("{}{close}", newline_indent(level)),
            }
        }
    }
}

fn write_collection(value: &Value, layout: Layout, level: usize, out: &mut String) {
    let entries = value.output_entries();
    if entries.is_empty() {
        out.push_str(match value {
            Value::Mapping(_) => "{}",
            _ => "[]",
        });
        return;
    }

    let delims = Delimiters::new(value, layout, level);
    out.push_str(&delims.open);
    for (i, (key, item)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(&delims.between);
        }
        if let Some(key) = key {
            push_quoted(key, out);
            out.push(':');
            if item.is_collection() {
                out.push_str(&delims.pairing);
            }
        }
        match item {
            Value::Text(s) => push_quoted(s, out),
            _ => write_collection(item, layout, level + 1, out),
        }
    }
    out.push_str(&delims.close);
}

/// Emit `s` as a double-quoted string, escaping quote characters only.
fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(&s.replace("\\\"", "\"").replace('"', "\\\""));
    out.push('"');
}
