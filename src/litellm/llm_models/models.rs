//! Model deployment data models

use serde::{Deserialize, Serialize};

use crate::litellm::Observed;
use crate::reconcile::per_token_to_per_million;
use crate::state::Attributes;

/// Response of `/model/new`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ModelCreated {
    pub model_id: Option<String>,
    pub model_name: Option<String>,
    pub model_info: Option<DeploymentInfo>,
}

impl ModelCreated {
    /// Deployment id, from whichever field the proxy version fills
    pub fn id(&self) -> Option<String> {
        self.model_id
            .clone()
            .or_else(|| self.model_info.as_ref().and_then(|info| info.id.clone()))
            .filter(|id| !id.is_empty())
    }
}

/// Response of `/model/info`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ModelInfoResponse {
    pub data: Option<Vec<Deployment>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Deployment {
    pub model_name: Option<String>,
    pub litellm_params: Option<LiteLlmParams>,
    pub model_info: Option<DeploymentInfo>,
}

/// Non-secret `litellm_params` fields; credentials are never decoded
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LiteLlmParams {
    pub model: Option<String>,
    pub custom_llm_provider: Option<String>,
    pub api_base: Option<String>,
    pub api_version: Option<String>,
    pub aws_region_name: Option<String>,
    pub vertex_project: Option<String>,
    pub vertex_location: Option<String>,
    pub litellm_credential_name: Option<String>,
    pub tpm: Option<i64>,
    pub rpm: Option<i64>,
    pub input_cost_per_token: Option<f64>,
    pub output_cost_per_token: Option<f64>,
    pub reasoning_effort: Option<String>,
    pub merge_reasoning_content_in_choices: Option<bool>,
    pub thinking: Option<ThinkingParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ThinkingParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub budget_tokens: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DeploymentInfo {
    pub id: Option<String>,
    pub mode: Option<String>,
    pub team_id: Option<String>,
    pub access_groups: Option<Vec<String>>,
}

impl LiteLlmParams {
    /// Provider and upstream model split out of `model` (`provider/name`)
    fn provider_and_base(&self) -> (Option<String>, Option<String>) {
        let model = self.model.as_deref().unwrap_or_default();
        let provider = self
            .custom_llm_provider
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| model.split_once('/').map(|(p, _)| p.to_string()));

        let base = match provider.as_deref() {
            Some(p) => model
                .strip_prefix(p)
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(model),
            None => model,
        };
        let base = Some(base.to_string()).filter(|b| !b.is_empty());
        (provider, base)
    }
}

impl ThinkingParams {
    fn into_block(self) -> Option<Attributes> {
        let enabled = match self.kind.as_deref() {
            Some("enabled") => true,
            Some("disabled") => false,
            _ => return None,
        };
        let block = Observed::new()
            .put("enabled", Some(enabled))
            .put("budget_tokens", self.budget_tokens.filter(|_| enabled))
            .into_attributes();
        Some(block)
    }
}

impl Deployment {
    pub fn id(&self) -> Option<&str> {
        self.model_info.as_ref().and_then(|info| info.id.as_deref())
    }

    pub fn into_observed(self) -> Attributes {
        let params = self.litellm_params.unwrap_or_default();
        let info = self.model_info.unwrap_or_default();
        let (provider, base) = params.provider_and_base();

        Observed::new()
            .put("model_id", info.id)
            .put("model_name", self.model_name)
            .put("custom_llm_provider", provider)
            .put("base_model", base)
            .put("mode", info.mode)
            .put("model_api_base", params.api_base)
            .put("api_version", params.api_version)
            .put("aws_region_name", params.aws_region_name)
            .put("vertex_project", params.vertex_project)
            .put("vertex_location", params.vertex_location)
            .put("litellm_credential_name", params.litellm_credential_name)
            .put("tpm", params.tpm)
            .put("rpm", params.rpm)
            .put(
                "input_cost_per_million_tokens",
                params.input_cost_per_token.map(per_token_to_per_million),
            )
            .put(
                "output_cost_per_million_tokens",
                params.output_cost_per_token.map(per_token_to_per_million),
            )
            .put("reasoning_effort", params.reasoning_effort)
            .put(
                "merge_reasoning_content_in_choices",
                params.merge_reasoning_content_in_choices,
            )
            .put_block("thinking", params.thinking.and_then(ThinkingParams::into_block))
            .put("access_groups", info.access_groups)
            .put("team_id", info.team_id)
            .into_attributes()
    }
}
