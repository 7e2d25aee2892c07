//! Member set lifecycle
//!
//! State tracks the members this resource manages. Members added to the team
//! out-of-band are ignored, except after an import where the tracked set is
//! empty and every current member is adopted.

use log::info;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::litellm::teams::{TeamInfoResponse, TeamMemberRole};
use crate::litellm::{
    normalized, seed_state, settle, tolerate_not_found, LiteLlmClient, Observed, ResourceKind,
};
use crate::reconcile::{create_payload, overlay_config};
use crate::state::{Attributes, ResourceData};

use super::members::{members_of, members_value};
use super::{diff, Member, MEMBER_SET_SCHEMA};

const KIND: ResourceKind = ResourceKind::TeamMemberAdd;

fn team_id_of(state: &ResourceData) -> String {
    state.get_str("team_id").unwrap_or(state.id()).to_string()
}

fn from_role(entry: &TeamMemberRole) -> Option<Member> {
    let mut attrs = Attributes::new();
    for (name, value) in [
        ("user_id", &entry.user_id),
        ("user_email", &entry.user_email),
        ("role", &entry.role),
    ] {
        if let Some(value) = value {
            attrs.insert(name.to_string(), Value::String(value.clone()));
        }
    }
    Member::from_attributes(&attrs)
}

/// Observed member set. Tracked members keep the identity form they were
/// declared with so switching between id and email never shows as drift.
fn observe(team: &TeamInfoResponse, team_id: &str, tracked: &[Member]) -> Attributes {
    let listed = team.members();
    let members: Vec<Member> = if tracked.is_empty() {
        listed.iter().filter_map(from_role).collect()
    } else {
        tracked
            .iter()
            .filter_map(|member| {
                listed
                    .iter()
                    .find(|m| member.matches(m.user_id.as_deref(), m.user_email.as_deref()))
                    .map(|m| Member {
                        role: m.role.clone().unwrap_or_else(|| member.role.clone()),
                        ..member.clone()
                    })
            })
            .collect()
    };

    let budget = listed
        .iter()
        .filter(|m| members.iter().any(|t| t.matches(m.user_id.as_deref(), m.user_email.as_deref())))
        .filter_map(|m| m.user_id.as_deref())
        .find_map(|user_id| team.member_budget(user_id));

    Observed::new()
        .put("team_id", Some(team_id))
        .put("member", Some(members_value(&members)))
        .put("max_budget_in_team", budget)
        .into_attributes()
}

pub async fn create(client: &LiteLlmClient, config: &Attributes) -> Result<ResourceData> {
    let mut declared = create_payload(&MEMBER_SET_SCHEMA, config);
    let team_id = declared
        .get("team_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Validation {
            attribute: "team_id".to_string(),
            message: "is required".to_string(),
        })?;
    let members = members_of(declared.get("member"));
    if members.is_empty() {
        return Err(ProviderError::Validation {
            attribute: "member".to_string(),
            message: "at least one member must be declared".to_string(),
        });
    }
    let budget = declared.get("max_budget_in_team").and_then(Value::as_f64);

    client
        .add_team_members(KIND, &team_id, &members, budget)
        .await?;
    info!("Added {} member(s) to team '{}'", members.len(), team_id);

    declared.insert("member".to_string(), members_value(&members));
    let seeded = seed_state(KIND, &team_id, declared);
    let read_back = read(client, &seeded).await?;
    Ok(normalized(KIND, seeded, read_back))
}

pub async fn read(client: &LiteLlmClient, state: &ResourceData) -> Result<Option<ResourceData>> {
    let team_id = team_id_of(state);
    let tracked = members_of(state.get("member"));
    let fetched = client
        .get_team(&team_id)
        .await
        .map(|team| observe(&team, &team_id, &tracked));
    settle(KIND, state, fetched)
}

/// Apply the member diff: one delete per removed member, one bulk add, then
/// one update per changed member
pub async fn update(
    client: &LiteLlmClient,
    state: &ResourceData,
    config: &Attributes,
) -> Result<ResourceData> {
    let team_id = team_id_of(state);
    let old = members_of(state.get("member"));
    let new = members_of(config.get("member"));
    let budget = config.get("max_budget_in_team").and_then(Value::as_f64);
    let budget_changed = match (budget, state.get_f64("max_budget_in_team")) {
        (Some(next), Some(previous)) => next != previous,
        (Some(_), None) => true,
        (None, _) => false,
    };

    let changes = diff(&old, &new, budget_changed);
    for member in &changes.removed {
        tolerate_not_found(
            KIND,
            member.identity(),
            client.remove_team_member(KIND, &team_id, member).await,
        )?;
    }
    if !changes.added.is_empty() {
        client
            .add_team_members(KIND, &team_id, &changes.added, budget)
            .await?;
    }
    for member in &changes.updated {
        client
            .update_team_member(KIND, &team_id, member, budget)
            .await?;
    }
    info!(
        "Reconciled members of team '{}': {} removed, {} added, {} updated",
        team_id,
        changes.removed.len(),
        changes.added.len(),
        changes.updated.len()
    );

    let mut next = state.clone();
    next.attributes = overlay_config(&MEMBER_SET_SCHEMA, &state.attributes, config);
    next.set("member", members_value(&new));
    let read_back = read(client, &next).await?;
    Ok(normalized(KIND, next, read_back))
}

/// Remove every tracked member; members already gone are skipped
pub async fn delete(client: &LiteLlmClient, state: &ResourceData) -> Result<()> {
    let team_id = team_id_of(state);
    for member in members_of(state.get("member")) {
        tolerate_not_found(
            KIND,
            member.identity(),
            client.remove_team_member(KIND, &team_id, &member).await,
        )?;
    }
    Ok(())
}
