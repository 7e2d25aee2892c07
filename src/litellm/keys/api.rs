//! Key API operations

use log::debug;
use serde_json::json;

use crate::config::api;
use crate::error::{ProviderError, Result};
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::{KeyGenerated, KeyInfoResponse};

impl LiteLlmClient {
    /// Generate a key
    pub async fn generate_key(&self, payload: &Attributes) -> Result<KeyGenerated> {
        debug!("Generating key at {}", self.url(api::KEY_GENERATE));
        let body = self
            .execute(
                self.post(api::KEY_GENERATE).json(payload),
                ResourceKind::Key,
                "generating key",
            )
            .await?;
        Self::decode(body, "key generate")
    }

    /// Get key info by key value or hashed token
    pub async fn get_key(&self, key: &str) -> Result<KeyInfoResponse> {
        let path = format!("{}?key={}", api::KEY_INFO, urlencoding::encode(key));
        let body = self
            .execute(self.get(&path), ResourceKind::Key, "reading key")
            .await?;
        let response: KeyInfoResponse = Self::decode(body, "key info")?;
        if response.info.is_none() {
            return Err(ProviderError::NotFound {
                resource: ResourceKind::Key.label().to_string(),
                message: "reading key: response carried no info".to_string(),
            });
        }
        Ok(response)
    }

    /// Update a key; `payload` must carry `key`
    pub async fn update_key(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::KEY_UPDATE).json(payload),
            ResourceKind::Key,
            "updating key",
        )
        .await?;
        Ok(())
    }

    /// Delete a key by key value or hashed token
    pub async fn delete_key(&self, key: &str) -> Result<()> {
        self.execute(
            self.post(api::KEY_DELETE).json(&json!({ "keys": [key] })),
            ResourceKind::Key,
            "deleting key",
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_key_by_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/key/info"))
            .and(query_param("key", "hash-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": "hash-1",
                "info": {"key_alias": "ci"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let info = client.get_key("hash-1").await.unwrap();
        assert_eq!(info.info.unwrap().key_alias.as_deref(), Some("ci"));
    }

    #[tokio::test]
    async fn test_delete_key_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/key/delete"))
            .and(body_json(json!({"keys": ["hash-1"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted_keys": ["hash-1"]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        client.delete_key("hash-1").await.unwrap();
    }
}
