//! Extension parameter coercion
//!
//! Extension maps are declared as `map(string)` but the wire format is untyped
//! JSON, so values are coerced opportunistically before merging.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::state::Attributes;

/// `"true"`/`"false"` → bool, integer strings → int, finite float strings →
/// float, anything else stays a string.
pub fn coerce_param(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::String(raw.to_string())
}

/// Merge extension params into a payload; they win over structured fields.
pub fn merge_extension_params(payload: &mut Attributes, params: &BTreeMap<String, String>) {
    for (key, raw) in params {
        payload.insert(key.clone(), coerce_param(raw));
    }
}
