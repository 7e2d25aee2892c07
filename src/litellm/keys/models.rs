//! Key data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// Response of `/key/generate`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KeyGenerated {
    /// Raw key value; never returned again
    pub key: Option<String>,
    /// Hashed key
    pub token: Option<String>,
    pub key_alias: Option<String>,
    pub expires: Option<String>,
}

/// Response of `/key/info`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KeyInfoResponse {
    /// Hashed key the info belongs to
    pub key: Option<String>,
    pub info: Option<KeyInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KeyInfo {
    pub key_alias: Option<String>,
    pub key_name: Option<String>,
    pub models: Option<Vec<String>>,
    pub max_budget: Option<f64>,
    pub soft_budget: Option<f64>,
    pub budget_duration: Option<String>,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
    pub tpm_limit: Option<i64>,
    pub rpm_limit: Option<i64>,
    pub max_parallel_requests: Option<i64>,
    pub metadata: Option<Map<String, Value>>,
    pub aliases: Option<Map<String, Value>>,
    pub tags: Option<Vec<String>>,
    pub allowed_routes: Option<Vec<String>>,
    pub blocked: Option<bool>,
    pub spend: Option<f64>,
    pub expires: Option<String>,
}

impl KeyInfoResponse {
    pub fn into_observed(self) -> Attributes {
        let token = self.key;
        let Some(info) = self.info else {
            return Observed::new().put("token", token).into_attributes();
        };

        Observed::new()
            .put("token", token)
            .put("key_alias", info.key_alias)
            .put("key_name", info.key_name)
            .put("models", info.models)
            .put("max_budget", info.max_budget)
            .put("soft_budget", info.soft_budget)
            .put("budget_duration", info.budget_duration)
            .put("team_id", info.team_id)
            .put("user_id", info.user_id)
            .put("tpm_limit", info.tpm_limit)
            .put("rpm_limit", info.rpm_limit)
            .put("max_parallel_requests", info.max_parallel_requests)
            .put_string_map("metadata", info.metadata)
            .put_string_map("aliases", info.aliases)
            .put("tags", info.tags)
            .put("allowed_routes", info.allowed_routes)
            .put("blocked", info.blocked)
            .put("spend", info.spend)
            .put("expires", info.expires)
            .into_attributes()
    }
}
