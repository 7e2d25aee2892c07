//! Team lifecycle

use log::info;
use serde_json::Value;

use crate::error::Result;
use crate::litellm::{
    assign_id, normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind,
};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::Team;

/// Create a team and read it back
pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let mut payload = create_payload(&SCHEMA, config);
    let requested = assign_id(&mut payload, "team_id");

    let created = client.create_team(&payload).await?;
    let team_id = created
        .team_id
        .filter(|id| !id.is_empty())
        .unwrap_or(requested);
    payload.insert("team_id".to_string(), Value::String(team_id.clone()));
    info!("Created team '{}'", team_id);

    let seeded = seed_state(KIND, &team_id, payload);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

/// Refresh a team; `None` when it no longer exists
pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client.get_team(state.id()).await.map(|response| {
        response
            .team_info
            .map(|info| info.into_observed())
            .unwrap_or_default()
    });
    settle(KIND, state, fetched)
}

/// Send changed attributes and read the team back
pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let mut payload = update_payload(&SCHEMA, &state.attributes, config);
    payload.insert("team_id".to_string(), Value::String(state.id().to_string()));

    client.update_team(&payload).await?;
    info!("Updated team '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

/// Delete a team; an already-absent team is not an error
pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_team(state.id()).await)
}
