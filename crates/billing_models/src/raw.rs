use serde_json::{Map, Value as JsonValue};

/// Side-table of wire fields kept alongside a record's typed fields.
///
/// Holds the complete payload a record was decoded from, in the order the
/// keys were observed. Known fields are overlaid on top of it when the
/// record is encoded, so unknown keys survive a round trip untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields {
    entries: Map<String, JsonValue>,
}

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when the key is present with a JSON `null` value.
    pub fn is_explicit_null(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(JsonValue::Null))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Keys that are not in `known`, in observed order.
    pub fn unknown_keys<'a>(&'a self, known: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
        self.keys().filter(move |key| !known.contains(key))
    }

    pub(crate) fn insert(&mut self, key: &str, value: JsonValue) {
        self.entries.insert(key.to_string(), value);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        // shift_remove keeps the order of the remaining keys
        self.entries.shift_remove(key);
    }

    pub fn into_map(self) -> Map<String, JsonValue> {
        self.entries
    }
}

impl From<Map<String, JsonValue>> for RawFields {
    fn from(entries: Map<String, JsonValue>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RawFields {
        match json!({"b": 1, "a": null, "c": "x"}) {
            JsonValue::Object(map) => RawFields::from(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn keeps_observed_order() {
        let raw = sample();
        assert_eq!(raw.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn explicit_null_is_distinct_from_absent() {
        let raw = sample();
        assert!(raw.is_explicit_null("a"));
        assert!(!raw.is_explicit_null("missing"));
        assert!(!raw.contains_key("missing"));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut raw = sample();
        raw.remove("b");
        raw.insert("d", json!(true));
        assert_eq!(raw.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn unknown_keys_skip_known_ones() {
        let raw = sample();
        let unknown: Vec<&str> = raw.unknown_keys(&["a", "b"]).collect();
        assert_eq!(unknown, vec!["c"]);
    }
}
