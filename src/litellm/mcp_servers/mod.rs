//! MCP servers registered with the proxy

mod api;
mod models;
mod resource;
mod wire;

pub use models::{McpCostInfo, McpInfo, McpServer};
pub use resource::{create, delete, read, update};

use crate::schema::{Attribute, Schema};

pub const TRANSPORTS: &[&str] = &["sse", "http", "stdio"];

pub const AUTH_TYPES: &[&str] = &["none", "api_key", "bearer_token", "basic", "authorization"];

const COST_INFO: &[Attribute] = &[
    Attribute::float("default_cost_per_query"),
    Attribute::string_map("tool_name_to_cost_per_query")
        .describe("Per-tool cost overrides; values are numeric strings"),
];

const ATTRIBUTES: &[Attribute] = &[
    Attribute::string("server_id").computed(),
    Attribute::string("server_name").required(),
    Attribute::string("alias"),
    Attribute::string("description"),
    Attribute::string("url"),
    Attribute::string("transport").one_of(TRANSPORTS),
    Attribute::string("auth_type").one_of(AUTH_TYPES),
    Attribute::string_list("mcp_access_groups"),
    Attribute::string("command").describe("Executable for stdio transport"),
    Attribute::string_list("args"),
    Attribute::string_map("env"),
    Attribute::block("cost_info", COST_INFO),
    Attribute::string("created_at").computed(),
    Attribute::string("updated_at").computed(),
    Attribute::string("status").computed(),
];

pub const SCHEMA: Schema = Schema {
    resource_type: "litellm_mcp_server",
    description: "An MCP server exposed through the proxy",
    attributes: ATTRIBUTES,
};
