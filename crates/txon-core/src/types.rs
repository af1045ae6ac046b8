//! TXON value tree shared by the reader, the writer and the JSON serializer.
//!
//! A TXON document is a tree of three node kinds: text leaves, mappings of
//! (possibly repeated) names to values, and anonymous lists. The reader builds
//! one of these per call; everything downstream only borrows it.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A node in a TXON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    /// Named terms. Keys are unique; repeated names collect into a `List`.
    Mapping(Mapping),
    /// Anonymous terms, in document order.
    List(Vec<Value>),
}

impl Value {
    /// The text of a leaf, or `None` for collections.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// True for `Mapping` and `List`, the only values the writers accept as roots.
    pub fn is_collection(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    /// The children of a collection in output order: mapping entries sorted by
    /// key, list items in sequence with no key. Empty for text.
    pub(crate) fn output_entries(&self) -> Vec<(Option<&str>, &Value)> {
        match self {
            Value::Mapping(map) => map
                .sorted_entries()
                .into_iter()
                .map(|(k, v)| (Some(k), v))
                .collect(),
            Value::List(items) => items.iter().map(|v| (None, v)).collect(),
            Value::Text(_) => Vec::new(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Mapping(Mapping::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

/// Convert decoded JSON into a TXON tree.
///
/// Objects become mappings (in source order, courtesy of serde_json's
/// `preserve_order`), arrays become lists, and every scalar becomes text
/// holding its JSON literal form: `42`, `1.5`, `true`, `null`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(obj) => {
                Value::Mapping(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            serde_json::Value::Array(arr) => {
                Value::List(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Number(n) => Value::Text(n.to_string()),
            serde_json::Value::Bool(b) => Value::Text(b.to_string()),
            serde_json::Value::Null => Value::Text("null".to_string()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::List(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(item)?;
                }
                out.end()
            }
        }
    }
}

/// Key-value pairs in arrival order, without duplicate keys.
///
/// The only way in is [`Mapping::insert`], which folds a repeated key into a
/// list instead of overwriting. Equality ignores entry order.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Store `value` under `key`.
    ///
    /// A new key is appended. For a key already present, the existing slot
    /// becomes a list of both values; if it already holds a list, `value` is
    /// pushed onto it.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, value));
            return;
        };
        match &mut slot.1 {
            Value::List(items) => items.push(value),
            existing => {
                let first = std::mem::replace(existing, Value::List(Vec::new()));
                *existing = Value::List(vec![first, value]);
            }
        }
    }

    /// Entries ordered by key, compared case-insensitively. Both serializers
    /// emit mappings in this order.
    pub fn sorted_entries(&self) -> Vec<(&str, &Value)> {
        let mut sorted: Vec<(&str, &Value)> = self.iter().collect();
        // Stable sort: keys equal under lowercasing keep arrival order.
        sorted.sort_by_cached_key(|(k, _)| k.to_lowercase());
        sorted
    }

    /// Replace a mapping whose single key is `""` with a list.
    ///
    /// A list stored under the empty key is used as-is; any other value is
    /// wrapped in a one-element list. Every other mapping is returned unchanged.
    pub fn elide_lists(mut self) -> Value {
        if self.entries.len() == 1 && self.entries[0].0.is_empty() {
            return match self.entries.swap_remove(0).1 {
                Value::List(items) => Value::List(items),
                other => Value::List(vec![other]),
            };
        }
        Value::Mapping(self)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn insert_promotes_repeated_key_to_list() {
        let mut map = Mapping::new();
        map.insert("a", text("1"));
        map.insert("a", text("2"));
        map.insert("a", text("3"));
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("a"),
            Some(&Value::List(vec![text("1"), text("2"), text("3")]))
        );
    }

    #[test]
    fn insert_appends_to_existing_list() {
        let mut map = Mapping::new();
        map.insert("a", Value::List(vec![text("x"), text("y")]));
        map.insert("a", text("z"));
        assert_eq!(
            map.get("a"),
            Some(&Value::List(vec![text("x"), text("y"), text("z")]))
        );
    }

    #[test]
    fn equality_ignores_entry_order() {
        let a: Mapping = [("x", text("1")), ("y", text("2"))].into_iter().collect();
        let b: Mapping = [("y", text("2")), ("x", text("1"))].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn sorted_entries_ignore_case() {
        let map: Mapping = [("b", text("")), ("A", text("")), ("c", text(""))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = map.sorted_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "b", "c"]);
    }

    #[test]
    fn elide_wraps_single_anonymous_value() {
        let map: Mapping = [("", text("x"))].into_iter().collect();
        assert_eq!(map.elide_lists(), Value::List(vec![text("x")]));
    }

    #[test]
    fn elide_flattens_anonymous_list() {
        let inner = Value::List(vec![text("x"), text("y")]);
        let map: Mapping = [("", inner.clone())].into_iter().collect();
        assert_eq!(map.elide_lists(), inner);
    }

    #[test]
    fn elide_is_idempotent() {
        let map: Mapping = [("", Value::List(vec![text("x")]))].into_iter().collect();
        let once = map.elide_lists();
        let twice: Mapping = [("", once.clone())].into_iter().collect();
        assert_eq!(twice.elide_lists(), once);
    }

    #[test]
    fn elide_leaves_named_mappings() {
        let map: Mapping = [("", text("x")), ("k", text("y"))].into_iter().collect();
        assert!(matches!(map.elide_lists(), Value::Mapping(m) if m.len() == 2));
    }

    #[test]
    fn json_scalars_become_literal_text() {
        let json = serde_json::json!({"n": 42, "f": 1.5, "b": true, "z": null});
        let value = Value::from(json);
        assert_eq!(value.get("n"), Some(&text("42")));
        assert_eq!(value.get("f"), Some(&text("1.5")));
        assert_eq!(value.get("b"), Some(&text("true")));
        assert_eq!(value.get("z"), Some(&text("null")));
    }
}
