//! Team data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// Response of `/team/new`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TeamCreated {
    pub team_id: Option<String>,
    pub team_alias: Option<String>,
}

/// Response of `/team/info`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TeamInfoResponse {
    pub team_id: Option<String>,
    pub team_info: Option<TeamInfo>,
    pub team_memberships: Option<Vec<TeamMembership>>,
}

/// Team record as stored by the proxy
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TeamInfo {
    pub team_id: Option<String>,
    pub team_alias: Option<String>,
    pub organization_id: Option<String>,
    pub models: Option<Vec<String>>,
    pub max_budget: Option<f64>,
    pub budget_duration: Option<String>,
    pub tpm_limit: Option<i64>,
    pub rpm_limit: Option<i64>,
    pub max_parallel_requests: Option<i64>,
    pub blocked: Option<bool>,
    pub metadata: Option<Map<String, Value>>,
    pub team_member_permissions: Option<Vec<String>>,
    pub spend: Option<f64>,
    pub budget_reset_at: Option<String>,
    pub created_at: Option<String>,
    pub members_with_roles: Option<Vec<TeamMemberRole>>,
}

/// Member entry of `members_with_roles`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TeamMemberRole {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub role: Option<String>,
}

/// Per-member budget link of a team
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TeamMembership {
    pub user_id: Option<String>,
    pub team_id: Option<String>,
    pub budget_id: Option<String>,
    pub litellm_budget_table: Option<BudgetTable>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct BudgetTable {
    pub max_budget: Option<f64>,
}

impl TeamInfoResponse {
    /// Team members (empty when the proxy omits them)
    pub fn members(&self) -> &[TeamMemberRole] {
        self.team_info
            .as_ref()
            .and_then(|info| info.members_with_roles.as_deref())
            .unwrap_or_default()
    }

    /// Budget the proxy holds for a member inside this team
    pub fn member_budget(&self, user_id: &str) -> Option<f64> {
        self.team_memberships
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|m| m.user_id.as_deref() == Some(user_id))
            .and_then(|m| m.litellm_budget_table.as_ref())
            .and_then(|b| b.max_budget)
    }
}

impl TeamInfo {
    pub fn into_observed(self) -> Attributes {
        Observed::new()
            .put("team_id", self.team_id)
            .put("team_alias", self.team_alias)
            .put("organization_id", self.organization_id)
            .put("models", self.models)
            .put("max_budget", self.max_budget)
            .put("budget_duration", self.budget_duration)
            .put("tpm_limit", self.tpm_limit)
            .put("rpm_limit", self.rpm_limit)
            .put("max_parallel_requests", self.max_parallel_requests)
            .put("blocked", self.blocked)
            .put_string_map("metadata", self.metadata)
            .put("team_member_permissions", self.team_member_permissions)
            .put("spend", self.spend)
            .put("budget_reset_at", self.budget_reset_at)
            .put("created_at", self.created_at)
            .into_attributes()
    }
}
