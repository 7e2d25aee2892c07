//! Vector store data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// Response of `/vector_store/info`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct VectorStoreInfoResponse {
    pub vector_store: Option<VectorStore>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct VectorStore {
    pub vector_store_id: Option<String>,
    pub custom_llm_provider: Option<String>,
    pub vector_store_name: Option<String>,
    pub vector_store_description: Option<String>,
    pub vector_store_metadata: Option<Map<String, Value>>,
    pub litellm_credential_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl VectorStore {
    pub fn into_observed(self) -> Attributes {
        Observed::new()
            .put("vector_store_id", self.vector_store_id)
            .put("custom_llm_provider", self.custom_llm_provider)
            .put("vector_store_name", self.vector_store_name)
            .put("vector_store_description", self.vector_store_description)
            .put_string_map("vector_store_metadata", self.vector_store_metadata)
            .put("litellm_credential_name", self.litellm_credential_name)
            .put("created_at", self.created_at)
            .put("updated_at", self.updated_at)
            .into_attributes()
    }
}
