//! LiteLLM management API resources
//!
//! Each resource module declares its attribute schema, its transfer types and
//! the create/read/update/delete orchestration over [`LiteLlmClient`].

mod client;
pub mod credentials;
pub mod keys;
mod kind;
pub mod llm_models;
pub mod mcp_servers;
pub mod not_found;
mod observed;
mod provider;
mod retry;
mod settings;
pub mod team_members;
pub mod teams;
pub mod users;
pub mod vector_stores;

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::Result;
use crate::reconcile::{generate_id, reconcile};
use crate::state::{Attributes, ResourceData};

pub use client::LiteLlmClient;
pub use kind::ResourceKind;
pub use observed::Observed;
pub use provider::{ApplyOutcome, Provider};
pub use retry::{retry_not_found, RetryConfig};
pub use settings::{ProviderSettings, SettingsResolver};

/// State seeded from declared configuration right after a successful create
pub(crate) fn seed_state(kind: ResourceKind, id: &str, declared: Attributes) -> ResourceData {
    let mut data = ResourceData::from_config(kind.type_name(), declared).with_id(id);
    data.touch();
    data
}

/// Client-assigned identifier: the declared one, or a generated UUID written
/// back into the payload
pub(crate) fn assign_id(payload: &mut Attributes, attribute: &str) -> String {
    let id = match payload.get(attribute).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let id = generate_id();
            debug!("Generated {} {}", attribute, id);
            id
        }
    };
    payload.insert(attribute.to_string(), Value::String(id.clone()));
    id
}

/// Merge a fetched response into state.
///
/// Not-found means the entity went away out-of-band: `Ok(None)`. Any other
/// error is returned and the caller keeps its stale state.
pub(crate) fn settle(
    kind: ResourceKind,
    state: &ResourceData,
    fetched: Result<Attributes>,
) -> Result<Option<ResourceData>> {
    match fetched {
        Ok(observed) => {
            let mut next = state.clone();
            next.attributes = reconcile(kind.schema(), &state.attributes, &observed);
            next.touch();
            Ok(Some(next))
        }
        Err(e) if e.is_not_found() => {
            warn!(
                "{} '{}' no longer exists; clearing state",
                kind.label(),
                state.id()
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Delete result with not-found treated as success
pub(crate) fn tolerate_not_found<T>(kind: ResourceKind, id: &str, result: Result<T>) -> Result<()> {
    match result {
        Ok(_) => {
            info!("Deleted {} '{}'", kind.label(), id);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            info!("{} '{}' already absent", kind.label(), id);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Read-after-create result: fall back to the seeded state when the entity
/// is not readable yet, leaving the next refresh to reconcile it
pub(crate) fn normalized(
    kind: ResourceKind,
    seeded: ResourceData,
    read: Option<ResourceData>,
) -> ResourceData {
    match read {
        Some(data) => data,
        None => {
            warn!(
                "{} '{}' was created but could not be read back yet",
                kind.label(),
                seeded.id()
            );
            seeded
        }
    }
}
