//! LiteLLM HTTP client for management API interactions

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::api;
use crate::error::{ProviderError, Result};

use super::not_found;
use super::settings::ProviderSettings;
use super::ResourceKind;

/// LiteLLM management API client
///
/// Holds no per-call state; one instance is shared by every operation.
pub struct LiteLlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LiteLlmClient {
    /// Create a client from resolved settings
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("litellm-provider/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(settings.insecure_skip_verify)
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path (path must start with '/')
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(api::API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, api::JSON_CONTENT_TYPE)
            .header(ACCEPT, api::JSON_CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.get(self.url(path)))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.post(self.url(path)))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.put(self.url(path)))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.patch(self.url(path)))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.delete(self.url(path)))
    }

    /// Send a request and return the JSON body.
    ///
    /// - any 2xx → body as JSON; empty bodies become `Value::Null` and non-JSON
    ///   bodies are returned as `Value::String`
    /// - anything else → [`ProviderError::NotFound`] or [`ProviderError::Api`]
    ///   depending on the resource's not-found shapes, prefixed with `context`
    /// - transport failures → [`ProviderError::Http`] with `context`
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        kind: ResourceKind,
        context: &str,
    ) -> Result<Value> {
        let response = request.send().await.map_err(|e| ProviderError::Http {
            context: context.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ProviderError::Http {
            context: context.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            debug!("{} failed with status {}: {}", context, status.as_u16(), body);
            return Err(not_found::classify(kind, status.as_u16(), &body).context(context));
        }

        debug!("{} succeeded with status {}", context, status.as_u16());
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    /// Decode a response body into its typed transfer struct
    pub(crate) fn decode<T>(value: Value, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(value)
            .map_err(|e| ProviderError::Json(format!("Failed to parse {} response: {}", context, e)))
    }
}

#[cfg(test)]
impl LiteLlmClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&ProviderSettings {
            api_base: base_url.to_string(),
            api_key: "sk-test".to_string(),
            insecure_skip_verify: false,
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let client = LiteLlmClient::test_client("http://localhost:4000/");
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/team/new"), "http://localhost:4000/team/new");
    }

    #[test]
    fn test_insecure_client_builds() {
        let client = LiteLlmClient::new(&ProviderSettings {
            api_base: "https://self-signed.local".to_string(),
            api_key: "sk".to_string(),
            insecure_skip_verify: true,
        });
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_execute_sends_standard_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/info"))
            .and(header("x-litellm-api-key", "sk-test"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let body = client
            .execute(client.get("/team/info"), ResourceKind::Team, "reading team")
            .await
            .unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_execute_tolerates_empty_and_untyped_bodies() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let empty = client
            .execute(client.post("/empty"), ResourceKind::Key, "deleting key")
            .await
            .unwrap();
        assert!(empty.is_null());

        let text = client
            .execute(client.post("/text"), ResourceKind::Key, "deleting key")
            .await
            .unwrap();
        assert_eq!(text, Value::String("deleted".to_string()));
    }

    #[tokio::test]
    async fn test_execute_accepts_201() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/credentials"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"success": true})))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let body = client
            .execute(client.post("/credentials"), ResourceKind::Credential, "creating credential")
            .await
            .unwrap();
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_execute_generic_error_keeps_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/team/new"))
            .respond_with(ResponseTemplate::new(400).set_body_string("team_alias already exists"))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let err = client
            .execute(client.post("/team/new"), ResourceKind::Team, "creating team")
            .await
            .unwrap_err();
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "creating team: team_alias already exists");
            }
            other => panic!("Expected ProviderError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_classifies_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/key/info"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": {"error": "Key not found in database"}
            })))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let err = client
            .execute(client.get("/key/info"), ResourceKind::Key, "reading key")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_execute_transport_error_has_context() {
        let client = LiteLlmClient::test_client("http://127.0.0.1:1");
        let err = client
            .execute(client.get("/team/info"), ResourceKind::Team, "reading team")
            .await
            .unwrap_err();
        match err {
            ProviderError::Http { context, .. } => assert_eq!(context, "reading team"),
            other => panic!("Expected ProviderError::Http, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_reports_context() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Typed {
            id: String,
        }

        let err = LiteLlmClient::decode::<Typed>(serde_json::json!({"nope": 1}), "team info")
            .unwrap_err();
        assert!(err.to_string().contains("team info"));
    }
}
