//! TXON <-> JSON translation.
//!
//! TXON → JSON reuses the reader and [`to_json`]. JSON → TXON hands decoding to
//! serde_json and feeds the result to the writer; a malformed document is the
//! only way either direction can fail.

use crate::error::Result;
use crate::json::to_json;
use crate::layout::Layout;
use crate::reader::read;
use crate::types::Value;
use crate::writer::write;
use tracing::debug;

/// Translate the TXON terms embedded in `text` into JSON.
pub fn txon_to_json(text: &str, layout: Layout) -> String {
    debug!(bytes = text.len(), %layout, "translating TXON to JSON");
    to_json(&read(text), layout)
}

/// Translate a JSON document into TXON.
///
/// Returns [`TxonError::JsonDecode`](crate::TxonError::JsonDecode) if `json`
/// is not valid JSON. A scalar JSON root has no TXON form and produces an
/// empty string.
pub fn json_to_txon(json: &str, layout: Layout) -> Result<String> {
    debug!(bytes = json.len(), %layout, "translating JSON to TXON");
    let value = decode_json(json)?;
    Ok(write(&value, layout))
}

/// Decode JSON text into a value tree. Scalars become their literal text.
pub fn decode_json(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}
