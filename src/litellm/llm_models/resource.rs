//! Model deployment lifecycle
//!
//! Deployments become readable some time after `/model/new` answers, so the
//! read after create backs off on not-found. An update that finds the
//! deployment gone recreates it.

use log::{info, warn};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::{
    normalized, retry_not_found, seed_state, settle, tolerate_not_found, LiteLlmClient,
    ResourceKind, RetryConfig,
};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::wire::deployment_body;
use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::Model;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    create_with_retry(client, config, &RetryConfig::default()).await
}

/// Create with an explicit read-after-create backoff
pub async fn create_with_retry(
    client: &LiteLlmClient,
    config: &Attributes,
    retry: &RetryConfig,
) -> Result<ResourceData> {
    let mut declared = create_payload(&SCHEMA, config);
    let created = client
        .create_model(&deployment_body(&declared, config, None))
        .await?;
    let model_id = created.id().ok_or_else(|| {
        ProviderError::Json("model create response carried no model id".to_string())
    })?;
    info!("Created model '{}'", model_id);

    declared.insert("model_id".to_string(), Value::String(model_id.clone()));
    let seeded = seed_state(KIND, &model_id, declared);

    let id = model_id.as_str();
    let deployment = retry_not_found(retry, move || client.get_model(id))
        .await
        .map_err(|e| {
            e.context(&format!(
                "model '{}' was created but never became readable",
                model_id
            ))
        })?;

    let read_back = settle(KIND, &seeded, Ok(deployment.into_observed()))?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client
        .get_model(state.id())
        .await
        .map(|deployment| deployment.into_observed());
    settle(KIND, state, fetched)
}

/// Update in place; falls back to create when the deployment is gone
pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let changed = update_payload(&SCHEMA, &state.attributes, config);
    let body = deployment_body(&changed, config, Some(state.id()));

    match client.update_model(&body).await {
        Ok(()) => info!("Updated model '{}'", state.id()),
        Err(e) if e.is_not_found() => {
            warn!(
                "model '{}' no longer exists; creating it again",
                state.id()
            );
            return create(client, config).await;
        }
        Err(e) => return Err(e),
    }

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_model(state.id()).await)
}
