//! User lifecycle

use log::info;
use serde_json::Value;

use crate::error::Result;
use crate::litellm::{
    assign_id, normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind,
};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::{CREATE_ONLY, SCHEMA};

const KIND: ResourceKind = ResourceKind::User;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let mut payload = create_payload(&SCHEMA, config);
    let requested = assign_id(&mut payload, "user_id");

    let created = client.create_user(&payload).await?;
    let user_id = created
        .user_id
        .filter(|id| !id.is_empty())
        .unwrap_or(requested);
    payload.insert("user_id".to_string(), Value::String(user_id.clone()));
    info!("Created user '{}'", user_id);

    let seeded = seed_state(KIND, &user_id, payload);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client.get_user(state.id()).await.map(|response| {
        response
            .user_info
            .map(|info| info.into_observed())
            .unwrap_or_default()
    });
    settle(KIND, state, fetched)
}

pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let mut payload = update_payload(&SCHEMA, &state.attributes, config);
    for name in CREATE_ONLY {
        payload.remove(*name);
    }
    payload.insert("user_id".to_string(), Value::String(state.id().to_string()));

    client.update_user(&payload).await?;
    info!("Updated user '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_user(state.id()).await)
}
