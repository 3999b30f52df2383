//! The MCP server handler.
//!
//! The server owns the loaded [`ToolRegistry`] and an rmcp `ToolRouter`
//! built from it. STDIO and TCP clients go through the router via the
//! `#[tool_handler]` macro; the HTTP transport calls [`McpServer::list_tools`]
//! and [`McpServer::call_tool`] directly.

use rmcp::{
    ErrorData as McpError, ServerHandler, handler::server::tool::ToolRouter, model::*,
    tool_handler,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use crate::domains::tools::{
    build_tool_router, execute_blocking, load_tools, validate_tool, FieldMap, ToolRegistry,
};

/// Cheap to clone; every TCP session gets its own copy sharing one registry.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    /// Read-only once the server is built.
    registry: Arc<ToolRegistry>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server around an already loaded registry.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        let registry = Arc::new(registry);
        info!("Serving {} tools", registry.len());

        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry,
        }
    }

    /// Load the tool set selected by the configuration and build the server.
    pub fn from_config(config: Config) -> super::Result<Self> {
        let registry = load_tools(config.tools.all_tools)?;
        Ok(Self::new(config, registry))
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Text sent to clients on initialize.
    pub fn instructions(&self) -> String {
        format!(
            "{} v{} - A Model Context Protocol server for Webex messaging operations",
            self.name(),
            self.version()
        )
    }

    /// Protocol descriptions of every routed tool, as sent in `tools/list`.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .iter()
            .filter_map(|tool| serde_json::to_value(tool).ok())
            .collect()
    }

    /// Call a tool by name outside the rmcp service loop.
    ///
    /// Unknown tools, and tools the router skipped as invalid, are protocol
    /// errors. Failures inside a tool come back as `is_error` results.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<FieldMap>,
    ) -> Result<CallToolResult, McpError> {
        let tool = self
            .registry
            .get_tool(name)
            .filter(|tool| validate_tool(tool.as_ref()).is_ok())
            .ok_or_else(|| {
                warn!("Unknown tool requested: {}", name);
                McpError::invalid_params(format!("Unknown tool: {name}"), None)
            })?;

        execute_blocking(tool, arguments).await
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
