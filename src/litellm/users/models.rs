//! User data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// Response of `/user/new`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserCreated {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}

/// Response of `/user/info`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserInfoResponse {
    pub user_id: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserInfo {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_alias: Option<String>,
    pub user_role: Option<String>,
    pub teams: Option<Vec<String>>,
    pub models: Option<Vec<String>>,
    pub max_budget: Option<f64>,
    pub budget_duration: Option<String>,
    pub tpm_limit: Option<i64>,
    pub rpm_limit: Option<i64>,
    pub max_parallel_requests: Option<i64>,
    pub metadata: Option<Map<String, Value>>,
    pub spend: Option<f64>,
    pub created_at: Option<String>,
}

impl UserInfo {
    pub fn into_observed(self) -> Attributes {
        Observed::new()
            .put("user_id", self.user_id)
            .put("user_email", self.user_email)
            .put("user_alias", self.user_alias)
            .put("user_role", self.user_role)
            .put("teams", self.teams)
            .put("models", self.models)
            .put("max_budget", self.max_budget)
            .put("budget_duration", self.budget_duration)
            .put("tpm_limit", self.tpm_limit)
            .put("rpm_limit", self.rpm_limit)
            .put("max_parallel_requests", self.max_parallel_requests)
            .put_string_map("metadata", self.metadata)
            .put("spend", self.spend)
            .put("created_at", self.created_at)
            .into_attributes()
    }
}
