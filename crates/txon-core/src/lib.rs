//! # txon-core
//!
//! Reader, writer and JSON translator for **TXON**, a minimal markup for
//! embedding structured data in ordinary text.
//!
//! A TXON term is a name, a colon, and a backtick-quoted value. Values nest,
//! names may repeat, and anything outside a term is ignored, so TXON can sit
//! inside comments or prose:
//!
//! ```text
//! Release notes.  version:`1.2` authors:`:`Ada` :`Grace``
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use txon_core::{json_to_txon, txon_to_json, Layout};
//!
//! // TXON → JSON
//! let json = txon_to_json("Release notes. version:`1.2`", Layout::Linear);
//! assert_eq!(json, r#"{ "version":"1.2" }"#);
//!
//! // JSON → TXON
//! let txon = json_to_txon(r#"{"tags":["a","b"]}"#, Layout::Linear).unwrap();
//! assert_eq!(txon, "tags:`:`a` :`b``");
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value` tree and the `Mapping` builder
//! - [`reader`] — TXON text → `Value`
//! - [`writer`] — `Value` → TXON text
//! - [`json`] — `Value` → JSON text
//! - [`translate`] — TXON ↔ JSON, JSON decoding via serde_json
//! - [`layout`] — `Layout` selector shared by both serializers
//! - [`error`] — Error types for JSON decode failures

pub mod error;
pub mod json;
pub mod layout;
pub mod reader;
pub mod translate;
pub mod types;
pub mod writer;

pub use error::TxonError;
pub use json::to_json;
pub use layout::{Layout, ParseLayoutError};
pub use reader::{read, read_bytes};
pub use translate::{decode_json, json_to_txon, txon_to_json};
pub use types::{Mapping, Value};
pub use writer::write;
