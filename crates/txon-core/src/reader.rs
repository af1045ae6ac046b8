//! TXON reader: extracts TXON terms embedded in arbitrary text.
//!
//! A term is `name:` followed by a backtick-delimited value; values nest:
//!
//! ```text
//! person:`name:`Ada` born:`1815``  <- prose outside terms is ignored
//! ```
//!
//! The reader is a single forward pass with no backtracking. It never fails:
//! unmatched closes are ignored at the top level and an unterminated term runs
//! to the end of the text.
//!
//! # Scanning rules
//!
//! - **Open**: a backtick immediately preceded by `:`.
//! - **Name**: the run of non-whitespace characters ending at that `:`,
//!   bounded by the end of the previous term (or the start of the scan).
//!   An empty name makes the term anonymous.
//! - **Close**: any other backtick not immediately preceded by `\`.
//! - A value containing nested terms becomes a mapping (or a list, see
//!   [`Mapping::elide_lists`]); otherwise it is the raw text between open and
//!   close with each `` \` `` turned back into a backtick.
//!
//! Positions index Unicode scalar values, not bytes.

use crate::types::{Mapping, Value};
use tracing::trace;

/// Parse all TXON terms found in `text`.
///
/// The result is always a `Mapping` or a `List`; text without any terms
/// yields an empty mapping.
pub fn read(text: &str) -> Value {
    let chars: Vec<char> = text.chars().collect();
    let (parsed, _) = scan_terms(&chars, 0, true);
    parsed.elide_lists()
}

/// Parse TXON from raw bytes, replacing invalid UTF-8 sequences with U+FFFD.
pub fn read_bytes(bytes: &[u8]) -> Value {
    read(&String::from_utf8_lossy(bytes))
}

/// Collect the terms of one nesting level, starting at `start`.
///
/// Nested levels stop at their first close marker; the root level scans to
/// the end. Returns the terms found and the position where scanning stopped
/// (the close marker, or the text length).
fn scan_terms(chars: &[char], start: usize, root: bool) -> (Mapping, usize) {
    let mut parsed = Mapping::new();
    let mut pos = start;
    // End of the previous term: name tokens never reach back past it.
    let mut boundary = start;

    while pos < chars.len() && (root || !is_close(chars, start, pos)) {
        if is_open(chars, start, pos) {
            let name_start = find_name(chars, boundary, pos);
            let key: String = chars[name_start..pos - 1].iter().collect();
            let (value, next) = parse_term(chars, pos + 1);
            trace!(key = %key, offset = name_start, "parsed term");
            parsed.insert(key, value);
            pos = next;
            boundary = next;
        } else {
            pos += 1;
        }
    }

    (parsed, pos)
}

/// Parse the value of a term whose open marker ends just before `start`.
/// Returns the value and the position just past its close marker.
fn parse_term(chars: &[char], start: usize) -> (Value, usize) {
    let (parsed, end) = scan_terms(chars, start, false);
    let value = if parsed.is_empty() {
        Value::Text(unescape(&chars[start..end]))
    } else {
        parsed.elide_lists()
    };
    (value, end + 1)
}

/// Is `pos` the backtick of a `:` + backtick open marker within this level?
fn is_open(chars: &[char], start: usize, pos: usize) -> bool {
    pos > start && chars[pos - 1] == ':' && chars[pos] == '`'
}

/// Is `pos` an unescaped backtick that does not open a term?
fn is_close(chars: &[char], start: usize, pos: usize) -> bool {
    chars[pos] == '`' && !is_open(chars, start, pos) && !(pos > start && chars[pos - 1] == '\\')
}

/// Walk back from the open backtick at `pos` over non-whitespace, stopping at
/// `boundary`. Returns the index where the name begins.
fn find_name(chars: &[char], boundary: usize, pos: usize) -> usize {
    let mut i = pos;
    loop {
        if i < boundary || chars[i].is_whitespace() {
            return i + 1;
        }
        if i == 0 {
            return 0;
        }
        i -= 1;
    }
}

/// Turn every `` \` `` back into a backtick.
fn unescape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter().peekable();
    while let Some(&ch) = iter.next() {
        if ch == '\\' && iter.peek() == Some(&&'`') {
            continue;
        }
        out.push(ch);
    }
    out
}
