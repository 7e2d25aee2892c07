//! Teams - budgets, rate limits and model access shared by a group of users

mod api;
mod models;
mod resource;

pub use models::{TeamCreated, TeamInfo, TeamInfoResponse, TeamMemberRole, TeamMembership};
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("team_id")
        .optional_computed()
        .force_new()
        .describe("Team identifier; a UUIDv7 is generated when omitted"),
    Attribute::string("team_alias")
        .required()
        .describe("Human-readable team name"),
    Attribute::string("organization_id").describe("Organization the team belongs to"),
    Attribute::string_list("models").describe("Models members of the team may call"),
    Attribute::float("max_budget").describe("Maximum spend in USD"),
    Attribute::string("budget_duration")
        .duration()
        .describe("Budget reset interval"),
    Attribute::int("tpm_limit").describe("Tokens per minute"),
    Attribute::int("rpm_limit").describe("Requests per minute"),
    Attribute::int("max_parallel_requests"),
    Attribute::bool("blocked").describe("Reject all requests made with team keys"),
    Attribute::string_map("metadata"),
    Attribute::string_list("team_member_permissions")
        .describe("Key management routes team members may call"),
    Attribute::float("spend").computed(),
    Attribute::string("budget_reset_at").computed(),
    Attribute::string("created_at").computed(),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_team",
    description: "A LiteLLM team",
    attributes: ATTRIBUTES,
};
