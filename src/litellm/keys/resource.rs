//! Key lifecycle
//!
//! The raw key value is only returned by `/key/generate`; it is stored as a
//! sensitive attribute and the hashed token becomes the identifier.

use log::info;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::{normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::Key;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let mut declared = create_payload(&SCHEMA, config);
    let generated = client.generate_key(&declared).await?;

    let id = generated
        .token
        .clone()
        .or_else(|| generated.key.clone())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ProviderError::Json("key generate response carried neither key nor token".to_string())
        })?;
    info!("Generated key '{}'", generated.key_alias.as_deref().unwrap_or(&id));

    if let Some(key) = generated.key {
        declared.insert("key".to_string(), Value::String(key));
    }
    if let Some(token) = generated.token {
        declared.insert("token".to_string(), Value::String(token));
    }

    let seeded = seed_state(KIND, &id, declared);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client
        .get_key(state.id())
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
    payload.insert("key".to_string(), Value::String(state.id().to_string()));

    client.update_key(&payload).await?;
    info!("Updated key '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_key(state.id()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_create_keeps_secret_and_uses_token_as_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/key/generate"))
            .and(body_json(json!({"key_alias": "ci", "models": ["gpt-4o"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": "sk-secret",
                "token": "hash-1",
                "key_alias": "ci"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/key/info"))
            .and(query_param("key", "hash-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": "hash-1",
                "info": {"key_alias": "ci", "models": ["gpt-4o"], "spend": 0.0}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let data = create(&client, &config(json!({"key_alias": "ci", "models": ["gpt-4o"]})))
            .await
            .unwrap();

        assert_eq!(data.id(), "hash-1");
        assert_eq!(data.attributes["key"], json!("sk-secret"));
        assert_eq!(data.attributes["spend"], json!(0.0));
    }

    #[tokio::test]
    async fn test_create_without_identifier_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/key/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key_alias": "ci"})))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        assert!(create(&client, &config(json!({"key_alias": "ci"}))).await.is_err());
    }

    #[tokio::test]
    async fn test_read_preserves_secret() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/key/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": "hash-1",
                "info": {"key_alias": "renamed", "blocked": true}
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::from_config(
            "litellm_key",
            config(json!({"key": "sk-secret", "key_alias": "ci"})),
        )
        .with_id("hash-1");

        let next = read(&client, &state).await.unwrap().unwrap();
        assert_eq!(next.attributes["key"], json!("sk-secret"));
        assert_eq!(next.attributes["key_alias"], json!("renamed"));
        assert_eq!(next.attributes["blocked"], json!(true));
    }

    #[tokio::test]
    async fn test_read_not_found_clears_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/key/info"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "detail": {"error": "Key not found in database"}
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::new("litellm_key").with_id("hash-1");
        assert!(read(&client, &state).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_addresses_by_identifier() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/key/update"))
            .and(body_json(json!({"key": "hash-1", "key_alias": "deploy"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/key/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": "hash-1",
                "info": {"key_alias": "deploy"}
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::from_config(
            "litellm_key",
            config(json!({"key": "sk-secret", "key_alias": "ci", "max_budget": 5.0})),
        )
        .with_id("hash-1");

        let next = update(
            &client,
            &state,
            &config(json!({"key_alias": "deploy", "max_budget": 5.0})),
        )
        .await
        .unwrap();
        assert_eq!(next.attributes["key_alias"], json!("deploy"));
        assert_eq!(next.attributes["key"], json!("sk-secret"));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/key/delete"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"message": "Key not found", "type": "auth_error", "code": "400"}
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::new("litellm_key").with_id("hash-1");
        assert!(delete(&client, &state).await.is_ok());
    }
}
