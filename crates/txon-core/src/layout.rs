//! Output layout selection shared by the TXON writer and the JSON serializer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whitespace policy applied when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Same as `Indented`.
    #[default]
    Auto,
    /// Everything on one line, siblings separated by a single space.
    Linear,
    /// One term per line, two spaces of indent per nesting level.
    Indented,
}

impl Layout {
    pub fn is_linear(self) -> bool {
        self == Layout::Linear
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Auto => "auto",
            Layout::Linear => "linear",
            Layout::Indented => "indented",
        })
    }
}

/// Error returned when parsing an unrecognized layout name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout '{0}' (expected auto, linear or indented)")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Layout::Auto),
            "linear" => Ok(Layout::Linear),
            "indented" => Ok(Layout::Indented),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// A newline followed by two spaces per `level`.
pub(crate) fn newline_indent(level: usize) -> String {
    let mut s = String::with_capacity(1 + level * 2);
    s.push('\n');
    s.push_str(&"  ".repeat(level));
    s
}
