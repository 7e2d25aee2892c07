//! Team membership API operations

use log::debug;
use serde_json::{json, Map, Value};

use crate::config::api;
use crate::error::Result;
use crate::litellm::{LiteLlmClient, ResourceKind};

use super::Member;

/// `user_id`/`user_email` addressing fields of a member plus the team
fn member_address(team_id: &str, member: &Member) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("team_id".to_string(), Value::String(team_id.to_string()));
    if let Some(id) = &member.user_id {
        body.insert("user_id".to_string(), Value::String(id.clone()));
    }
    if let Some(email) = &member.user_email {
        body.insert("user_email".to_string(), Value::String(email.clone()));
    }
    body
}

impl LiteLlmClient {
    /// Add members to a team in one call
    pub async fn add_team_members(
        &self,
        kind: ResourceKind,
        team_id: &str,
        members: &[Member],
        max_budget_in_team: Option<f64>,
    ) -> Result<()> {
        let mut body = json!({
            "team_id": team_id,
            "member": members,
        });
        if let Some(budget) = max_budget_in_team {
            body["max_budget_in_team"] = json!(budget);
        }
        debug!(
            "Adding {} member(s) to team '{}' at {}",
            members.len(),
            team_id,
            self.url(api::TEAM_MEMBER_ADD)
        );

        let context = format!("adding members to team '{}'", team_id);
        self.execute(self.post(api::TEAM_MEMBER_ADD).json(&body), kind, &context)
            .await?;
        Ok(())
    }

    /// Change a member's role and/or in-team budget
    pub async fn update_team_member(
        &self,
        kind: ResourceKind,
        team_id: &str,
        member: &Member,
        max_budget_in_team: Option<f64>,
    ) -> Result<()> {
        let mut body = member_address(team_id, member);
        body.insert("role".to_string(), Value::String(member.role.clone()));
        if let Some(budget) = max_budget_in_team {
            body.insert("max_budget_in_team".to_string(), json!(budget));
        }

        let context = format!(
            "updating member '{}' of team '{}'",
            member.identity(),
            team_id
        );
        self.execute(self.post(api::TEAM_MEMBER_UPDATE).json(&body), kind, &context)
            .await?;
        Ok(())
    }

    /// Remove a member from a team
    pub async fn remove_team_member(
        &self,
        kind: ResourceKind,
        team_id: &str,
        member: &Member,
    ) -> Result<()> {
        let body = member_address(team_id, member);
        let context = format!(
            "removing member '{}' from team '{}'",
            member.identity(),
            team_id
        );
        self.execute(self.post(api::TEAM_MEMBER_DELETE).json(&body), kind, &context)
            .await?;
        Ok(())
    }
}
