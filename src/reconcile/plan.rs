//! Apply planning: what would converging state to config do

use std::fmt;

use crate::schema::Schema;
use crate::state::{Attributes, ResourceData};

use super::{declared, values_equal};

/// Planned action for one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// No tracked entity: create it
    Create,
    /// In-place update of the listed attributes
    Update(Vec<&'static str>),
    /// Identity-bearing attributes changed: delete and create
    Replace(Vec<&'static str>),
    NoChange,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Create => write!(f, "create"),
            Plan::Update(attrs) => write!(f, "update in-place ({})", attrs.join(", ")),
            Plan::Replace(attrs) => write!(f, "replace ({} forces replacement)", attrs.join(", ")),
            Plan::NoChange => write!(f, "no changes"),
        }
    }
}

/// Classify the action needed to converge `state` to `config`
pub fn plan(schema: &Schema, state: Option<&ResourceData>, config: &Attributes) -> Plan {
    let Some(state) = state.filter(|s| s.is_present()) else {
        return Plan::Create;
    };

    let replace = differing(schema.force_new(), &state.attributes, config);
    if !replace.is_empty() {
        return Plan::Replace(replace);
    }

    let changed = differing(schema.settable(), &state.attributes, config);
    if changed.is_empty() {
        Plan::NoChange
    } else {
        Plan::Update(changed)
    }
}

fn differing(
    attrs: impl Iterator<Item = &'static crate::schema::Attribute>,
    state: &Attributes,
    config: &Attributes,
) -> Vec<&'static str> {
    attrs
        .filter(|attr| {
            declared(config, attr.name, attr.ty).is_some_and(|value| {
                state
                    .get(attr.name)
                    .map_or(true, |old| !values_equal(old, value))
            })
        })
        .map(|attr| attr.name)
        .collect()
}
