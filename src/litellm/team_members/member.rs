//! Single team membership lifecycle

use log::info;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::teams::TeamInfoResponse;
use crate::litellm::{
    normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, Observed, ResourceKind,
};
use crate::reconcile::{create_payload, overlay_config, update_payload};
use crate::state::{Attributes, ResourceData};

use super::{Member, MEMBER_SCHEMA};

const KIND: ResourceKind = ResourceKind::TeamMember;

fn member_id(team_id: &str, member: &Member) -> String {
    format!("{}:{}", team_id, member.identity())
}

/// Split a `{team_id}:{user}` id; a user part containing `@` is an email
pub fn parse_id(id: &str) -> Result<(String, Member)> {
    let (team_id, user) = id
        .split_once(':')
        .filter(|(team, user)| !team.is_empty() && !user.is_empty())
        .ok_or_else(|| ProviderError::Validation {
            attribute: "id".to_string(),
            message: format!("'{}' must look like <team_id>:<user_id or user_email>", id),
        })?;

    let (user_id, user_email) = if user.contains('@') {
        (None, Some(user.to_string()))
    } else {
        (Some(user.to_string()), None)
    };
    Ok((
        team_id.to_string(),
        Member {
            user_id,
            user_email,
            role: "user".to_string(),
        },
    ))
}

/// Team and member a state entry points at; the id is parsed after import
fn address(state: &ResourceData) -> Result<(String, Member)> {
    match (
        state.get_str("team_id"),
        Member::from_attributes(&state.attributes),
    ) {
        (Some(team_id), Some(member)) => Ok((team_id.to_string(), member)),
        _ => parse_id(state.id()),
    }
}

fn observe(team: &TeamInfoResponse, team_id: &str, member: &Member) -> Result<Attributes> {
    let found = team
        .members()
        .iter()
        .find(|m| member.matches(m.user_id.as_deref(), m.user_email.as_deref()))
        .ok_or_else(|| ProviderError::NotFound {
            resource: KIND.label().to_string(),
            message: format!("'{}' is not a member of team '{}'", member.identity(), team_id),
        })?;

    let budget = found
        .user_id
        .as_deref()
        .and_then(|user_id| team.member_budget(user_id));
    Ok(Observed::new()
        .put("team_id", Some(team_id))
        .put("user_id", found.user_id.clone())
        .put("user_email", found.user_email.clone())
        .put("role", found.role.clone())
        .put("max_budget_in_team", budget)
        .into_attributes())
}

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let payload = create_payload(&MEMBER_SCHEMA, config);
    let team_id = payload
        .get("team_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Validation {
            attribute: "team_id".to_string(),
            message: "is required".to_string(),
        })?;
    let member = Member::from_attributes(&payload).ok_or_else(|| ProviderError::Validation {
        attribute: "user_id".to_string(),
        message: "either user_id or user_email must be set".to_string(),
    })?;
    let budget = payload.get("max_budget_in_team").and_then(Value::as_f64);

    client
        .add_team_members(KIND, &team_id, std::slice::from_ref(&member), budget)
        .await?;
    let id = member_id(&team_id, &member);
    info!("Added '{}' to team '{}'", member.identity(), team_id);

    let seeded = seed_state(KIND, &id, payload);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let (team_id, member) = address(state)?;
    let fetched = client
        .get_team(&team_id)
        .await
        .and_then(|team| observe(&team, &team_id, &member));
    settle(KIND, state, fetched)
}

pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let (team_id, current) = address(state)?;
    let payload = update_payload(&MEMBER_SCHEMA, &state.attributes, config);

    if payload.contains_key("role") || payload.contains_key("max_budget_in_team") {
        let role = payload
            .get("role")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(current.role.clone());
        let member = Member { role, ..current };
        let budget = config.get("max_budget_in_team").and_then(Value::as_f64);

        client
            .update_team_member(KIND, &team_id, &member, budget)
            .await?;
        info!("Updated '{}' in team '{}'", member.identity(), team_id);
    }

    let mut next = state.clone();
    next.attributes = overlay_config(&MEMBER_SCHEMA, &state.attributes, config);
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    let (team_id, member) = address(state)?;
    tolerate_not_found(
        KIND,
        state.id(),
        client.remove_team_member(KIND, &team_id, &member).await,
    )
}
