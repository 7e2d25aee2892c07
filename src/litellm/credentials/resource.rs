//! Credential lifecycle

use log::info;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::{normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::Credential;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let payload = create_payload(&SCHEMA, config);
    let name = payload
        .get("credential_name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Validation {
            attribute: "credential_name".to_string(),
            message: "is required".to_string(),
        })?;

    client.create_credential(&payload).await?;
    info!("Created credential '{}'", name);

    let seeded = seed_state(KIND, &name, payload);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client
        .get_credential(state.id())
        .await
        .map(|response| response.into_observed());
    settle(KIND, state, fetched)
}

pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let mut payload = update_payload(&SCHEMA, &state.attributes, config);
    payload.insert(
        "credential_name".to_string(),
        Value::String(state.id().to_string()),
    );

    client.update_credential(state.id(), &payload).await?;
    info!("Updated credential '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_credential(state.id()).await)
}
