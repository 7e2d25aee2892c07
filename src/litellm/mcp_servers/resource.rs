//! MCP server lifecycle

use log::info;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::{normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, ResourceKind};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::wire::server_body;
use super::SCHEMA;

const KIND: ResourceKind = ResourceKind::McpServer;

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let declared = create_payload(&SCHEMA, config);
    let created = client
        .create_mcp_server(&server_body(declared.clone()))
        .await?;

    let server_id = created
        .server_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ProviderError::Json("MCP server create response carried no server_id".to_string())
        })?;
    info!("Created MCP server '{}'", server_id);

    let mut seeded = seed_state(KIND, &server_id, declared);
    seeded.set("server_id", server_id.as_str());
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let fetched = client
        .get_mcp_server(state.id())
        .await
        .map(|server| server.into_observed());
    settle(KIND, state, fetched)
}

/// The update body always names the server, since the proxy validates
/// `server_name` on every write
pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let mut payload = update_payload(&SCHEMA, &state.attributes, config);
    payload.insert(
        "server_id".to_string(),
        Value::String(state.id().to_string()),
    );
    if !payload.contains_key("server_name") {
        if let Some(name) = state.get("server_name") {
            payload.insert("server_name".to_string(), name.clone());
        }
    }

    client.update_mcp_server(&server_body(payload)).await?;
    info!("Updated MCP server '{}'", state.id());

    let mut next = state.clone();
    next.attributes = overlay_config(&SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    tolerate_not_found(KIND, state.id(), client.delete_mcp_server(state.id()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_create_nests_cost_info() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/mcp/server"))
            .and(body_json(json!({
                "server_name": "github",
                "url": "https://mcp.example.com/sse",
                "transport": "sse",
                "mcp_info": {
                    "mcp_server_cost_info": {
                        "default_cost_per_query": 0.01,
                        "tool_name_to_cost_per_query": {"search": 0.5}
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "server_id": "srv-1",
                "server_name": "github"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/mcp/server/srv-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "server_id": "srv-1",
                "server_name": "github",
                "url": "https://mcp.example.com/sse",
                "transport": "sse",
                "mcp_info": {
                    "mcp_server_cost_info": {
                        "default_cost_per_query": 0.01,
                        "tool_name_to_cost_per_query": {"search": 0.5}
                    }
                },
                "status": "healthy"
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let data = create(
            &client,
            &config(json!({
                "server_name": "github",
                "url": "https://mcp.example.com/sse",
                "transport": "sse",
                "cost_info": [{
                    "default_cost_per_query": 0.01,
                    "tool_name_to_cost_per_query": {"search": "0.5"}
                }]
            })),
        )
        .await
        .unwrap();

        assert_eq!(data.id(), "srv-1");
        assert_eq!(data.attributes["server_id"], json!("srv-1"));
        assert_eq!(data.attributes["status"], json!("healthy"));
        assert_eq!(
            data.attributes["cost_info"],
            json!([{
                "default_cost_per_query": 0.01,
                "tool_name_to_cost_per_query": {"search": "0.5"}
            }])
        );
    }

    #[tokio::test]
    async fn test_create_without_server_id_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/mcp/server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let err = create(&client, &config(json!({"server_name": "github"})))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("server_id"));
    }

    #[tokio::test]
    async fn test_update_puts_changed_fields_with_identity() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/mcp/server"))
            .and(body_json(json!({
                "server_id": "srv-1",
                "server_name": "github",
                "description": "GitHub tools"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"server_id": "srv-1"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/mcp/server/srv-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "server_id": "srv-1",
                "server_name": "github",
                "description": "GitHub tools"
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::from_config(
            "litellm_mcp_server",
            config(json!({"server_id": "srv-1", "server_name": "github", "transport": "sse"})),
        )
        .with_id("srv-1");

        let next = update(
            &client,
            &state,
            &config(json!({
                "server_name": "github",
                "transport": "sse",
                "description": "GitHub tools"
            })),
        )
        .await
        .unwrap();
        assert_eq!(next.attributes["description"], json!("GitHub tools"));
        assert_eq!(next.attributes["transport"], json!("sse"));
    }

    #[tokio::test]
    async fn test_read_not_found_message_clears_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/mcp/server/srv-9"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "MCP Server srv-9 not found"})),
            )
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::new("litellm_mcp_server").with_id("srv-9");
        assert!(read(&client, &state).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/mcp/server/srv-1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::new("litellm_mcp_server").with_id("srv-1");
        assert!(delete(&client, &state).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_surfaces_other_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/mcp/server/srv-1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let state = ResourceData::new("litellm_mcp_server").with_id("srv-1");
        let err = delete(&client, &state).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 403, .. }));
    }
}
