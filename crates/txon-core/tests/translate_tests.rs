use txon_core::{decode_json, json_to_txon, read, txon_to_json, Layout, TxonError, Value};

// ============================================================================
// TXON → JSON
// ============================================================================

#[test]
fn txon_to_json_linear() {
    let doc = "Contact card. name:`Ada` langs:`:`en` :`fr``";
    assert_eq!(
        txon_to_json(doc, Layout::Linear),
        r#"{ "langs":[ "en", "fr" ], "name":"Ada" }"#
    );
}

#[test]
fn txon_to_json_repeated_names() {
    assert_eq!(
        txon_to_json("a:`1` a:`2`", Layout::Linear),
        r#"{ "a":[ "1", "2" ] }"#
    );
}

#[test]
fn txon_to_json_anonymous_root() {
    assert_eq!(
        txon_to_json(":`x` :`y`", Layout::Indented),
        "[\n  \"x\",\n  \"y\"\n]"
    );
}

#[test]
fn txon_to_json_empty() {
    assert_eq!(txon_to_json("", Layout::Linear), "{}");
}

#[test]
fn txon_to_json_output_parses() {
    let doc = "a:`1` b:`c:`x \"quoted\" y` d:`:`p` :`q```";
    for layout in [Layout::Linear, Layout::Indented] {
        let out = txon_to_json(doc, layout);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"a": "1", "b": {"c": "x \"quoted\" y", "d": ["p", "q"]}})
        );
    }
}

// ============================================================================
// JSON → TXON
// ============================================================================

#[test]
fn json_to_txon_linear() {
    let txon = json_to_txon(r#"{"name":"Ada","tags":["x","y"]}"#, Layout::Linear).unwrap();
    assert_eq!(txon, "name:`Ada` tags:`:`x` :`y``");
}

#[test]
fn json_to_txon_indented() {
    let txon = json_to_txon(r#"{"b":{"c":"2"},"a":"1"}"#, Layout::Indented).unwrap();
    assert_eq!(txon, "a:`1`\nb:`\n  c:`2`\n`");
}

#[test]
fn json_to_txon_scalars_as_literal_text() {
    let txon = json_to_txon(r#"{"n":42,"b":true,"z":null,"f":-1.5}"#, Layout::Linear).unwrap();
    assert_eq!(txon, "b:`true` f:`-1.5` n:`42` z:`null`");
}

#[test]
fn json_to_txon_root_array() {
    let txon = json_to_txon(r#"["a",{"k":"v"}]"#, Layout::Linear).unwrap();
    assert_eq!(txon, ":`a` :`k:`v``");
}

#[test]
fn json_to_txon_scalar_root_is_empty() {
    assert_eq!(json_to_txon("42", Layout::Auto).unwrap(), "");
    assert_eq!(json_to_txon(r#""text""#, Layout::Auto).unwrap(), "");
}

#[test]
fn json_to_txon_escapes_backticks() {
    let txon = json_to_txon(r#"{"cmd":"run `ls`"}"#, Layout::Linear).unwrap();
    assert_eq!(txon, r"cmd:`run \`ls\``");
}

#[test]
fn json_to_txon_invalid_json_fails() {
    let err = json_to_txon("this is not json {{{", Layout::Linear).unwrap_err();
    assert!(matches!(err, TxonError::JsonDecode(_)));
    assert!(err.to_string().starts_with("JSON decode error"));
}

#[test]
fn decode_json_builds_value_tree() {
    let value = decode_json(r#"{"a":[1,"two"],"b":{}}"#).unwrap();
    assert_eq!(
        value.get("a"),
        Some(&Value::List(vec![Value::from("1"), Value::from("two")]))
    );
    assert_eq!(value.get("b").and_then(Value::as_mapping).map(|m| m.len()), Some(0));
}

// ============================================================================
// Roundtrips
// ============================================================================

#[test]
fn json_through_txon_and_back() {
    let json = r#"{"name":"Ada","tags":["x","y"],"meta":{"born":"1815","Place":"London"}}"#;
    for layout in [Layout::Linear, Layout::Indented] {
        let txon = json_to_txon(json, layout).unwrap();
        let back = txon_to_json(&txon, layout);
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        let roundtripped: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(original, roundtripped, "TXON was:\n{txon}");
    }
}

#[test]
fn value_serializes_through_serde() {
    let value = read("a:`1` b:`:`x` :`y``");
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json, serde_json::json!({"a": "1", "b": ["x", "y"]}));
}
