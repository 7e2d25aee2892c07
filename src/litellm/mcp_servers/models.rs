//! MCP server data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::litellm::Observed;
use crate::state::Attributes;

/// MCP server record, returned by create, read and update
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct McpServer {
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub transport: Option<String>,
    pub auth_type: Option<String>,
    pub mcp_access_groups: Option<Vec<String>>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub env: Option<Map<String, Value>>,
    pub mcp_info: Option<McpInfo>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct McpInfo {
    pub mcp_server_cost_info: Option<McpCostInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct McpCostInfo {
    pub default_cost_per_query: Option<f64>,
    pub tool_name_to_cost_per_query: Option<Map<String, Value>>,
}

impl McpServer {
    pub fn into_observed(self) -> Attributes {
        let cost_info = self
            .mcp_info
            .and_then(|info| info.mcp_server_cost_info)
            .map(|cost| {
                Observed::new()
                    .put("default_cost_per_query", cost.default_cost_per_query)
                    .put_string_map(
                        "tool_name_to_cost_per_query",
                        cost.tool_name_to_cost_per_query,
                    )
                    .into_attributes()
            });

        Observed::new()
            .put("server_id", self.server_id)
            .put("server_name", self.server_name)
            .put("alias", self.alias)
            .put("description", self.description)
            .put("url", self.url)
            .put("transport", self.transport)
            .put("auth_type", self.auth_type)
            .put("mcp_access_groups", self.mcp_access_groups)
            .put("command", self.command)
            .put("args", self.args)
            .put_string_map("env", self.env)
            .put_block("cost_info", cost_info)
            .put("created_at", self.created_at)
            .put("updated_at", self.updated_at)
            .put("status", self.status)
            .into_attributes()
    }
}
