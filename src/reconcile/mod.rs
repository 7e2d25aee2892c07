//! Build/set/diff utilities shared by every resource
//!
//! - [`create_payload`] / [`update_payload`] turn declared configuration into
//!   request attributes (full set on create, changed-field projection on update)
//! - [`reconcile`] merges an observed API response into prior state
//! - [`overlay_config`] lays declared values over state before an update
//! - [`plan`] classifies what an apply would do
//!
//! All of them are pure functions over [`Attributes`] driven by the resource
//! [`Schema`]; wire-format specifics (renames, nesting, unit conversion) stay in
//! each resource module.

mod build;
mod coerce;
mod identifier;
mod merge;
mod plan;
mod units;

pub use build::{create_payload, update_payload};
pub use coerce::{coerce_param, merge_extension_params};
pub use identifier::{generate_id, generate_id_with};
pub use merge::{overlay_config, reconcile};
pub use plan::{plan, Plan};
pub use units::{per_million_to_per_token, per_token_to_per_million, TOKENS_PER_MILLION};

use serde_json::Value;

use crate::schema::AttrType;
use crate::state::Attributes;

/// Whether a value carries no information for an attribute of this type.
///
/// Scalars (numbers, booleans) are never empty once present; strings, lists,
/// maps and blocks are empty when they hold nothing.
pub(crate) fn is_empty(ty: AttrType, value: &Value) -> bool {
    match (ty, value) {
        (_, Value::Null) => true,
        (AttrType::Bool | AttrType::Int | AttrType::Float, _) => false,
        (_, Value::String(s)) => s.is_empty(),
        (_, Value::Array(items)) => items.is_empty(),
        (_, Value::Object(map)) => map.is_empty(),
        _ => false,
    }
}

/// Compare attribute values; numbers compare numerically so `1` equals `1.0`
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) if a.is_number() && b.is_number() => x == y,
        _ => a == b,
    }
}

/// Declared, non-empty value of an attribute
pub(crate) fn declared<'a>(config: &'a Attributes, name: &str, ty: AttrType) -> Option<&'a Value> {
    config.get(name).filter(|v| !is_empty(ty, v))
}
