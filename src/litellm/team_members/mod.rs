//! Team memberships
//!
//! Two resource types share this module:
//! - `litellm_team_member`: one user in one team, id `{team_id}:{user}`
//! - `litellm_team_member_add`: a set of members of one team, id `{team_id}`,
//!   reconciled by diffing old and new member sets

mod api;
mod diff;
pub mod member;
mod members;
pub mod member_set;

pub use diff::{diff, MemberDiff};
pub use members::{normalize_members, Member};

use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::state::Attributes;

pub const ROLES: &[&str] = &["admin", "user"];

const MEMBER_ATTRIBUTES: &[Attribute] = &[
    Attribute::string("team_id").required().force_new(),
    Attribute::string("user_id").force_new(),
    Attribute::string("user_email")
        .force_new()
        .describe("Used to identify the member when user_id is not set"),
    Attribute::string("role").one_of(ROLES),
    Attribute::float("max_budget_in_team"),
];

pub const MEMBER_SCHEMA: Schema = Schema {
    resource_type: "litellm_team_member",
    description: "A single user's membership in a team",
    attributes: MEMBER_ATTRIBUTES,
};

const MEMBER_FIELDS: &[Attribute] = &[
    Attribute::string("user_id"),
    Attribute::string("user_email"),
    Attribute::string("role").one_of(ROLES),
];

const MEMBER_SET_ATTRIBUTES: &[Attribute] = &[
    Attribute::string("team_id").required().force_new(),
    Attribute::block_list("member", MEMBER_FIELDS)
        .required()
        .describe("Members of the team; order is not significant"),
    Attribute::float("max_budget_in_team").describe("Budget shared by every listed member"),
];

pub const MEMBER_SET_SCHEMA: Schema = Schema {
    resource_type: "litellm_team_member_add",
    description: "A set of members of one team",
    attributes: MEMBER_SET_ATTRIBUTES,
};

/// Every member must be identified by `user_id` or `user_email`
pub fn validate_identity(schema: &Schema, config: &Attributes) -> Result<()> {
    if schema.resource_type == MEMBER_SCHEMA.resource_type {
        return match Member::from_attributes(config) {
            Some(_) => Ok(()),
            None => Err(missing_identity("user_id")),
        };
    }

    let entries = config
        .get("member")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, entry) in entries.iter().enumerate() {
        let identified = entry
            .as_object()
            .and_then(Member::from_attributes)
            .is_some();
        if !identified {
            return Err(missing_identity(&format!("member.{}.user_id", i)));
        }
    }
    Ok(())
}

/// Canonical form of a member-set configuration: members sorted by key with
/// the default role filled in, so ordering never shows up as a change
pub fn normalize_config(schema: &Schema, config: &mut Attributes) {
    if schema.resource_type != MEMBER_SET_SCHEMA.resource_type {
        return;
    }
    if let Some(members) = config.get("member").cloned() {
        config.insert("member".to_string(), normalize_members(&members));
    }
}

fn missing_identity(attribute: &str) -> ProviderError {
    ProviderError::Validation {
        attribute: attribute.to_string(),
        message: "either user_id or user_email must be set".to_string(),
    }
}
