//! Internal users of the proxy

mod api;
mod models;
mod resource;

pub use models::{UserCreated, UserInfo, UserInfoResponse};
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

pub const USER_ROLES: &[&str] = &[
    "proxy_admin",
    "proxy_admin_viewer",
    "internal_user",
    "internal_user_viewer",
];

/// Attributes only meaningful when the user is created
pub(crate) const CREATE_ONLY: &[&str] = &["auto_create_key", "send_invite_email"];

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("user_id")
        .optional_computed()
        .force_new()
        .describe("User identifier; a UUIDv7 is generated when omitted"),
    Attribute::string("user_email"),
    Attribute::string("user_alias"),
    Attribute::string("user_role").one_of(USER_ROLES),
    Attribute::string_list("teams").describe("Teams the user joins on creation"),
    Attribute::string_list("models"),
    Attribute::float("max_budget"),
    Attribute::string("budget_duration").duration(),
    Attribute::int("tpm_limit"),
    Attribute::int("rpm_limit"),
    Attribute::int("max_parallel_requests"),
    Attribute::string_map("metadata"),
    Attribute::bool("auto_create_key").describe("Issue a default key with the user"),
    Attribute::bool("send_invite_email"),
    Attribute::float("spend").computed(),
    Attribute::string("created_at").computed(),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_user",
    description: "A LiteLLM internal user",
    attributes: ATTRIBUTES,
};
