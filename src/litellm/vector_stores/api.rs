//! Vector store API operations

use serde_json::json;

use crate::config::api;
use crate::error::{ProviderError, Result};
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::{VectorStore, VectorStoreInfoResponse};

impl LiteLlmClient {
    /// Register a vector store
    pub async fn create_vector_store(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::VECTOR_STORE_NEW).json(payload),
            ResourceKind::VectorStore,
            "creating vector store",
        )
        .await?;
        Ok(())
    }

    /// Get a vector store by ID
    pub async fn get_vector_store(&self, vector_store_id: &str) -> Result<VectorStore> {
        let path = format!(
            "{}?vector_store_id={}",
            api::VECTOR_STORE_INFO,
            urlencoding::encode(vector_store_id)
        );
        let context = format!("reading vector store '{}'", vector_store_id);
        let body = self
            .execute(self.get(&path), ResourceKind::VectorStore, &context)
            .await?;
        let response: VectorStoreInfoResponse = Self::decode(body, "vector store info")?;
        response.vector_store.ok_or_else(|| ProviderError::NotFound {
            resource: ResourceKind::VectorStore.label().to_string(),
            message: format!("{}: response carried no vector_store", context),
        })
    }

    /// Update a vector store; `payload` must carry `vector_store_id`
    pub async fn update_vector_store(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::VECTOR_STORE_UPDATE).json(payload),
            ResourceKind::VectorStore,
            "updating vector store",
        )
        .await?;
        Ok(())
    }

    /// Delete a vector store
    pub async fn delete_vector_store(&self, vector_store_id: &str) -> Result<()> {
        let context = format!("deleting vector store '{}'", vector_store_id);
        self.execute(
            self.post(api::VECTOR_STORE_DELETE)
                .json(&json!({ "vector_store_id": vector_store_id })),
            ResourceKind::VectorStore,
            &context,
        )
        .await?;
        Ok(())
    }
}
