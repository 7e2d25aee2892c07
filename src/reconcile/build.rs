//! Request payload building from declared configuration

use log::debug;

use crate::schema::{AttrType, Schema};
use crate::state::Attributes;

use super::{declared, values_equal};

/// Every declared attribute the operator set.
///
/// Empty strings, lists and maps count as unset; numbers and booleans are sent
/// whenever they are declared, including `0` and `false`.
pub fn create_payload(schema: &Schema, config: &Attributes) -> Attributes {
    let mut payload = Attributes::new();
    for attr in schema.settable() {
        if let Some(value) = declared(config, attr.name, attr.ty) {
            payload.insert(attr.name.to_string(), value.clone());
        }
    }
    debug!(
        "{} create payload attributes: {:?}",
        schema.resource_type,
        payload.keys().collect::<Vec<_>>()
    );
    payload
}

/// Changed-field projection for update.
///
/// Only attributes whose declared value differs from the last-synced state are
/// included. Declared booleans are always included: an omitted boolean cannot
/// be told apart from `false` by the API. Attributes removed from the
/// configuration are not sent; identity keys are added by the caller.
pub fn update_payload(schema: &Schema, state: &Attributes, config: &Attributes) -> Attributes {
    let mut payload = Attributes::new();
    for attr in schema.settable() {
        let Some(value) = declared(config, attr.name, attr.ty) else {
            continue;
        };
        let changed = state
            .get(attr.name)
            .map_or(true, |old| !values_equal(old, value));
        if changed || attr.ty == AttrType::Bool {
            payload.insert(attr.name.to_string(), value.clone());
        }
    }
    debug!(
        "{} update payload attributes: {:?}",
        schema.resource_type,
        payload.keys().collect::<Vec<_>>()
    );
    payload
}
