//! Model deployment API operations

use log::debug;
use serde_json::{json, Value};

use crate::config::api;
use crate::error::{ProviderError, Result};
use crate::litellm::{LiteLlmClient, ResourceKind};

use super::models::{Deployment, ModelCreated, ModelInfoResponse};

impl LiteLlmClient {
    /// Create a model deployment
    pub async fn create_model(&self, body: &Value) -> Result<ModelCreated> {
        debug!("Creating model at {}", self.url(api::MODEL_NEW));
        let response = self
            .execute(
                self.post(api::MODEL_NEW).json(body),
                ResourceKind::Model,
                "creating model",
            )
            .await?;
        Self::decode(response, "model create")
    }

    /// Get a deployment by id; an empty `data` list means it does not exist
    pub async fn get_model(&self, model_id: &str) -> Result<Deployment> {
        let path = format!(
            "{}?litellm_model_id={}",
            api::MODEL_INFO,
            urlencoding::encode(model_id)
        );
        let context = format!("reading model '{}'", model_id);
        let response = self
            .execute(self.get(&path), ResourceKind::Model, &context)
            .await?;
        let info: ModelInfoResponse = Self::decode(response, "model info")?;

        let mut deployments = info.data.unwrap_or_default();
        let position = deployments
            .iter()
            .position(|d| d.id() == Some(model_id))
            .or_else(|| (deployments.len() == 1).then_some(0));

        match position {
            Some(index) => Ok(deployments.swap_remove(index)),
            None => Err(ProviderError::NotFound {
                resource: ResourceKind::Model.label().to_string(),
                message: format!("{}: no deployment with this id", context),
            }),
        }
    }

    /// Update a deployment; `body.model_info.id` addresses it
    pub async fn update_model(&self, body: &Value) -> Result<()> {
        self.execute(
            self.post(api::MODEL_UPDATE).json(body),
            ResourceKind::Model,
            "updating model",
        )
        .await?;
        Ok(())
    }

    /// Delete a deployment
    pub async fn delete_model(&self, model_id: &str) -> Result<()> {
        let context = format!("deleting model '{}'", model_id);
        self.execute(
            self.post(api::MODEL_DELETE).json(&json!({ "id": model_id })),
            ResourceKind::Model,
            &context,
        )
        .await?;
        Ok(())
    }
}
