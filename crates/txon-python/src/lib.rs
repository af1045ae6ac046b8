//! # txon-python
//!
//! Python bindings for the TXON reader, writer and JSON translator, built
//! with PyO3.
//!
//! Exposes the following functions to Python as the `txon_format` module:
//!
//! - `txon_to_json(text, layout="auto")` -- TXON embedded in text -> JSON string
//! - `json_to_txon(json, layout="auto")` -- JSON string -> TXON string

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use txon_core::Layout;

fn parse_layout(layout: &str) -> PyResult<Layout> {
    layout
        .parse::<Layout>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Translate the TXON terms found in a string into JSON.
///
/// Args:
///     text: Any text; prose outside TXON terms is ignored.
///     layout: "auto", "linear" or "indented".
///
/// Returns:
///     The JSON string.
///
/// Raises:
///     ValueError: If the layout name is not recognized.
#[pyfunction]
#[pyo3(signature = (text, layout="auto"))]
fn txon_to_json(text: &str, layout: &str) -> PyResult<String> {
    Ok(txon_core::txon_to_json(text, parse_layout(layout)?))
}

/// Translate a JSON string into TXON.
///
/// Args:
///     json: A valid JSON string.
///     layout: "auto", "linear" or "indented".
///
/// Returns:
///     The TXON string.
///
/// Raises:
///     ValueError: If the input is not valid JSON or the layout is unknown.
#[pyfunction]
#[pyo3(signature = (json, layout="auto"))]
fn json_to_txon(json: &str, layout: &str) -> PyResult<String> {
    txon_core::json_to_txon(json, parse_layout(layout)?)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `txon_format` Python module, implemented in Rust via PyO3.
#[pymodule]
fn txon_format(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(txon_to_json, m)?)?;
    m.add_function(wrap_pyfunction!(json_to_txon, m)?)?;
    Ok(())
}
