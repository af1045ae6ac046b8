//! WASM bindings for txon-core.
//!
//! Exposes `txonToJson` and `jsonToTxon` as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p txon-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/txon-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/txon_wasm.wasm
//! ```
//!
//! `layout` is one of `"auto"`, `"linear"` or `"indented"`; an unknown name
//! throws.

use txon_core::Layout;
use wasm_bindgen::prelude::*;

/// Translate TXON embedded in `text` into JSON. Never fails for valid layouts.
#[wasm_bindgen(js_name = txonToJson)]
pub fn txon_to_json(text: &str, layout: &str) -> std::result::Result<String, JsValue> {
    let layout = parse_layout(layout)?;
    Ok(txon_core::txon_to_json(text, layout))
}

/// Translate a JSON document into TXON.
///
/// Throws a JS error if the input is not valid JSON.
#[wasm_bindgen(js_name = jsonToTxon)]
pub fn json_to_txon(json: &str, layout: &str) -> std::result::Result<String, JsValue> {
    let layout = parse_layout(layout)?;
    txon_core::json_to_txon(json, layout).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_layout(layout: &str) -> std::result::Result<Layout, JsValue> {
    layout
        .parse::<Layout>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
