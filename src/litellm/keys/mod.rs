//! Virtual keys - API keys issued by the proxy to callers

mod api;
mod models;
mod resource;

pub use models::{KeyGenerated, KeyInfo, KeyInfoResponse};
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("key")
        .computed()
        .sensitive()
        .describe("Generated key value; only returned when the key is created"),
    Attribute::string("token")
        .computed()
        .describe("Hashed key; used as the identifier"),
    Attribute::string("key_alias"),
    Attribute::string("key_name")
        .computed()
        .describe("Masked key shown by the proxy"),
    Attribute::string_list("models"),
    Attribute::float("max_budget"),
    Attribute::float("soft_budget").describe("Spend at which alerts are sent"),
    Attribute::string("budget_duration").duration(),
    Attribute::string("duration")
        .duration()
        .describe("Lifetime of the key from creation"),
    Attribute::string("team_id"),
    Attribute::string("user_id"),
    Attribute::int("tpm_limit"),
    Attribute::int("rpm_limit"),
    Attribute::int("max_parallel_requests"),
    Attribute::string_map("metadata"),
    Attribute::string_map("aliases").describe("Model name aliases"),
    Attribute::string_list("tags"),
    Attribute::string_list("allowed_routes"),
    Attribute::bool("blocked"),
    Attribute::float("spend").computed(),
    Attribute::string("expires").computed(),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_key",
    description: "A LiteLLM virtual key",
    attributes: ATTRIBUTES,
};
