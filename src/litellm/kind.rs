//! Resource type registry

use std::fmt;
use std::str::FromStr;

use crate::schema::Schema;

use super::{credentials, keys, llm_models, mcp_servers, team_members, teams, users, vector_stores};

/// Resource types managed by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Team,
    Key,
    User,
    Model,
    Credential,
    VectorStore,
    McpServer,
    TeamMember,
    TeamMemberAdd,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Team,
        ResourceKind::Key,
        ResourceKind::User,
        ResourceKind::Model,
        ResourceKind::Credential,
        ResourceKind::VectorStore,
        ResourceKind::McpServer,
        ResourceKind::TeamMember,
        ResourceKind::TeamMemberAdd,
    ];

    /// Declarative type identifier (e.g. `litellm_team`)
    pub fn type_name(&self) -> &'static str {
        self.schema().resource_type
    }

    /// Human-readable entity name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Team => "team",
            ResourceKind::Key => "key",
            ResourceKind::User => "user",
            ResourceKind::Model => "model",
            ResourceKind::Credential => "credential",
            ResourceKind::VectorStore => "vector store",
            ResourceKind::McpServer => "MCP server",
            ResourceKind::TeamMember | ResourceKind::TeamMemberAdd => "team member",
        }
    }

    /// Attribute table of this resource type
    pub fn schema(&self) -> &'static Schema {
        match self {
            ResourceKind::Team => &teams::SCHEMA,
            ResourceKind::Key => &keys::SCHEMA,
            ResourceKind::User => &users::SCHEMA,
            ResourceKind::Model => &llm_models::SCHEMA,
            ResourceKind::Credential => &credentials::SCHEMA,
            ResourceKind::VectorStore => &vector_stores::SCHEMA,
            ResourceKind::McpServer => &mcp_servers::SCHEMA,
            ResourceKind::TeamMember => &team_members::MEMBER_SCHEMA,
            ResourceKind::TeamMemberAdd => &team_members::MEMBER_SET_SCHEMA,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    /// Accepts the full type name (`litellm_team`) or the short form (`team`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        let short = wanted.strip_prefix("litellm_").unwrap_or(&wanted);
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.type_name().strip_prefix("litellm_") == Some(short))
            .ok_or_else(|| {
                let known: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.type_name()).collect();
                format!(
                    "unknown resource type '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}
