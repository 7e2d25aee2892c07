//! Observed attribute maps built from typed API responses
//!
//! Response structs decode every field as `Option`; only fields the API
//! actually returned make it into the observed map handed to `reconcile`.

use serde_json::{Map, Value};

use crate::state::Attributes;

/// Builder for the attributes an API response carried
#[derive(Debug, Default)]
pub struct Observed {
    attributes: Attributes,
}

impl Observed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a returned field; `None` leaves the attribute absent
    pub fn put<T: Into<Value>>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.attributes.insert(name.to_string(), value.into());
        }
        self
    }

    /// Record a free-form JSON object as `map(string)`
    pub fn put_string_map(self, name: &str, value: Option<Map<String, Value>>) -> Self {
        let map = value.map(|map| {
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, Value::String(stringify(v))))
                .collect::<Map<String, Value>>()
        });
        self.put(name, map)
    }

    /// Record a nested object as a single-element block list
    pub fn put_block(self, name: &str, value: Option<Attributes>) -> Self {
        let block = value
            .filter(|b| !b.is_empty())
            .map(|b| Value::Array(vec![Value::Object(b)]));
        self.put(name, block)
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}

/// String form of a JSON value; strings are taken verbatim
fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_skips_none() {
        let observed = Observed::new()
            .put("alias", Some("a".to_string()))
            .put::<f64>("max_budget", None)
            .put("blocked", Some(false))
            .put("rpm_limit", Some(0i64))
            .into_attributes();
        assert_eq!(
            Value::Object(observed),
            json!({"alias": "a", "blocked": false, "rpm_limit": 0})
        );
    }

    #[test]
    fn test_put_string_map_stringifies_values() {
        let raw = json!({"env": "prod", "tier": 2, "flag": true, "gone": null});
        let observed = Observed::new()
            .put_string_map("metadata", raw.as_object().cloned())
            .into_attributes();
        assert_eq!(
            observed["metadata"],
            json!({"env": "prod", "tier": "2", "flag": "true"})
        );
    }

    #[test]
    fn test_put_block_wraps_in_list() {
        let block = json!({"default_cost_per_query": 0.1});
        let observed = Observed::new()
            .put_block("cost_info", block.as_object().cloned())
            .put_block("thinking", Some(Attributes::new()))
            .into_attributes();
        assert_eq!(observed["cost_info"], json!([{"default_cost_per_query": 0.1}]));
        assert!(observed.get("thinking").is_none());
    }
}
