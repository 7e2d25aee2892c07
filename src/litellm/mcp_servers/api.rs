//! MCP server API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::litellm::{LiteLlmClient, ResourceKind};
use crate::state::Attributes;

use super::models::McpServer;

fn server_path(server_id: &str) -> String {
    format!("{}/{}", api::MCP_SERVER, urlencoding::encode(server_id))
}

impl LiteLlmClient {
    /// Register an MCP server
    pub async fn create_mcp_server(&self, body: &Attributes) -> Result<McpServer> {
        debug!("Creating MCP server at {}", self.url(api::MCP_SERVER));
        let response = self
            .execute(
                self.post(api::MCP_SERVER).json(body),
                ResourceKind::McpServer,
                "creating MCP server",
            )
            .await?;
        Self::decode(response, "MCP server create")
    }

    /// Get an MCP server by ID
    pub async fn get_mcp_server(&self, server_id: &str) -> Result<McpServer> {
        let context = format!("reading MCP server '{}'", server_id);
        let response = self
            .execute(
                self.get(&server_path(server_id)),
                ResourceKind::McpServer,
                &context,
            )
            .await?;
        Self::decode(response, "MCP server")
    }

    /// Replace an MCP server; `body` must carry `server_id`
    pub async fn update_mcp_server(&self, body: &Attributes) -> Result<()> {
        self.execute(
            self.put(api::MCP_SERVER).json(body),
            ResourceKind::McpServer,
            "updating MCP server",
        )
        .await?;
        Ok(())
    }

    /// Delete an MCP server
    pub async fn delete_mcp_server(&self, server_id: &str) -> Result<()> {
        let context = format!("deleting MCP server '{}'", server_id);
        self.execute(
            self.delete(&server_path(server_id)),
            ResourceKind::McpServer,
            &context,
        )
        .await?;
        Ok(())
    }
}
