//! Persisted resource state
//!
//! State is the provider's mirror of the last-observed entity: its identifier
//! plus a JSON attribute map keyed by schema attribute name.

mod store;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub use store::StateStore;

/// Attribute values keyed by schema attribute name
pub type Attributes = serde_json::Map<String, Value>;

/// A resource instance as stored between operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    /// RFC 3339 timestamp of the last successful sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<String>,
}

impl ResourceData {
    /// Create empty (absent) data for a resource type
    pub fn new(resource_type: &str) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            ..Default::default()
        }
    }

    /// Create data holding a declared configuration
    pub fn from_config(resource_type: &str, attributes: Attributes) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            attributes,
            ..Default::default()
        }
    }

    /// Set the identifier, marking the entity present
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the entity is tracked as existing
    pub fn is_present(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Record a successful sync with the server
    pub fn touch(&mut self) {
        self.last_synced = Some(chrono::Utc::now().to_rfc3339());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// Non-empty string attribute
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_string_map(&self, key: &str) -> BTreeMap<String, String> {
        self.get(key)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First element of a nested block attribute
    pub fn get_block(&self, key: &str) -> Option<&Attributes> {
        self.get(key)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(Value::as_object)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    /// Drop all attributes and the identifier (entity is gone)
    pub fn clear(&mut self) {
        self.id = None;
        self.attributes.clear();
        self.last_synced = None;
    }
}
