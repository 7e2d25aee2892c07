//! Model deployments - upstream models exposed through the proxy
//!
//! Flat schema attributes are mapped onto the nested `litellm_params` /
//! `model_info` wire shape by [`wire`]; costs are declared per million tokens
//! and sent per token.

mod api;
mod models;
mod resource;
mod wire;

pub use models::{Deployment, DeploymentInfo, LiteLlmParams, ModelCreated, ModelInfoResponse};
pub use resource::{create, create_with_retry, delete, read, update};

use crate::schema::{Attribute, Schema};

pub const MODES: &[&str] = &[
    "chat",
    "completion",
    "embedding",
    "image_generation",
    "audio_transcription",
    "audio_speech",
    "moderation",
    "rerank",
];

pub const REASONING_EFFORTS: &[&str] = &["low", "medium", "high"];

const THINKING: &[Attribute] = &[
    Attribute::bool("enabled").required(),
    Attribute::int("budget_tokens").describe("Token budget for extended thinking"),
];

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("model_id")
        .computed()
        .describe("Deployment id assigned by the proxy"),
    Attribute::string("model_name")
        .required()
        .describe("Public model name callers request"),
    Attribute::string("custom_llm_provider")
        .required()
        .describe("Upstream provider (openai, anthropic, bedrock, ...)"),
    Attribute::string("base_model")
        .required()
        .describe("Upstream model name, without the provider prefix"),
    Attribute::string("mode").one_of(MODES),
    Attribute::string("model_api_key").sensitive(),
    Attribute::string("model_api_base"),
    Attribute::string("api_version"),
    Attribute::string("aws_access_key_id").sensitive(),
    Attribute::string("aws_secret_access_key").sensitive(),
    Attribute::string("aws_region_name"),
    Attribute::string("vertex_project"),
    Attribute::string("vertex_location"),
    Attribute::string("vertex_credentials").sensitive(),
    Attribute::string("litellm_credential_name")
        .describe("Stored credential to authenticate with instead of inline secrets"),
    Attribute::int("tpm"),
    Attribute::int("rpm"),
    Attribute::float("input_cost_per_million_tokens"),
    Attribute::float("output_cost_per_million_tokens"),
    Attribute::string("reasoning_effort").one_of(REASONING_EFFORTS),
    Attribute::bool("merge_reasoning_content_in_choices"),
    Attribute::block("thinking", THINKING),
    Attribute::string_list("access_groups"),
    Attribute::string("team_id").describe("Restrict the model to one team"),
    Attribute::string_map("additional_litellm_params")
        .describe("Extra litellm_params; values are coerced to bool or number when they parse"),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_model",
    description: "A LiteLLM model deployment",
    attributes: ATTRIBUTES,
};
