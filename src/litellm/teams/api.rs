//! Team API operations

use log::debug;
use serde_json::json;

use crate::config::api;
use crate::error::{ProviderError, Result};
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::{TeamCreated, TeamInfoResponse};

impl LiteLlmClient {
    /// Create a team
    pub async fn create_team(&self, payload: &Attributes) -> Result<TeamCreated> {
        debug!("Creating team at {}", self.url(api::TEAM_NEW));
        let body = self
            .execute(
                self.post(api::TEAM_NEW).json(payload),
                ResourceKind::Team,
                "creating team",
            )
            .await?;
        Self::decode(body, "team create")
    }

    /// Get a team with its members and memberships
    pub async fn get_team(&self, team_id: &str) -> Result<TeamInfoResponse> {
        let path = format!("{}?team_id={}", api::TEAM_INFO, urlencoding::encode(team_id));
        let context = format!("reading team '{}'", team_id);
        debug!("Fetching team: {}", self.url(&path));

        let body = self
            .execute(self.get(&path), ResourceKind::Team, &context)
            .await?;
        let response: TeamInfoResponse = Self::decode(body, "team info")?;

        // Some proxy versions answer 200 with an empty record for unknown ids
        if response.team_info.is_none() {
            return Err(ProviderError::NotFound {
                resource: ResourceKind::Team.label().to_string(),
                message: format!("{}: response carried no team_info", context),
            });
        }
        Ok(response)
    }

    /// Update a team; `payload` must carry `team_id`
    pub async fn update_team(&self, payload: &Attributes) -> Result<()> {
        self.execute(
            self.post(api::TEAM_UPDATE).json(payload),
            ResourceKind::Team,
            "updating team",
        )
        .await?;
        Ok(())
    }

    /// Delete a team
    pub async fn delete_team(&self, team_id: &str) -> Result<()> {
        let context = format!("deleting team '{}'", team_id);
        self.execute(
            self.post(api::TEAM_DELETE)
                .json(&json!({ "team_ids": [team_id] })),
            ResourceKind::Team,
            &context,
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
    async fn test_get_team() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/info"))
            .and(query_param("team_id", "team 1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "team_id": "team 1",
                "team_info": {"team_id": "team 1", "team_alias": "platform"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let team = client.get_team("team 1").await.unwrap();
        assert_eq!(
            team.team_info.unwrap().team_alias.as_deref(),
            Some("platform")
        );
    }

    #[tokio::test]
    async fn test_get_team_without_info_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"team_id": "x"})))
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        let err = client.get_team("x").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_team_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/team/delete"))
            .and(body_json(json!({"team_ids": ["team-1"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted_teams": ["team-1"]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LiteLlmClient::test_client(&mock_server.uri());
        client.delete_team("team-1").await.unwrap();
    }
}
