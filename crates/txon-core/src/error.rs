//! Error types for TXON translation.
//!
//! Reading TXON and serializing either format never fails; the only fallible
//! step is decoding JSON, which is delegated to serde_json.

use thiserror::Error;

/// Errors that can occur while translating JSON into TXON.
#[derive(Error, Debug)]
pub enum TxonError {
    /// The input string was not valid JSON. Carries serde_json's error unmodified.
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

/// Convenience alias used throughout txon-core.
pub type Result<T> = std::result::Result<T, TxonError>;
