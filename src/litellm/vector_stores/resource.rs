//! Vector store lifecycle

use log::info;
use serde_json::Value;

use crate::error::Result;
use crate::litellm::{
    assign_id, normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind,
};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::VectorStore;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let mut payload = create_payload(&SCHEMA, config);
    let id = assign_id(&mut payload, "vector_store_id");

    client.create_vector_store(&payload).await?;
    info!("Created vector store '{}'", id);

    let seeded = seed_state(KIND, &id, payload);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client
        .get_vector_store(state.id())
        .await
        .map(|store| store.into_observed());
    settle(KIND, state, fetched)
}

pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let mut payload = update_payload(&SCHEMA, &state.attributes, config);
    payload.insert(
        "vector_store_id".to_string(),
        Value::String(state.id().to_string()),
    );

    client.update_vector_store(&payload).await?;
    info!("Updated vector store '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_vector_store(state.id()).await)
}
