//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registry tool that passes name and description validation gets a
//! dynamic route. Tool logic is blocking, so each call runs on a tokio
//! blocking worker.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::CallToolResult,
};
use tracing::{debug, warn};

use super::base::{FieldMap, Tool};
use super::handlers;
use super::registry::ToolRegistry;
use super::validation::validate_tool;

/// Protocol metadata for a tool.
pub fn to_mcp_tool(tool: &dyn Tool) -> rmcp::model::Tool {
    rmcp::model::Tool {
        name: tool.name().to_string().into(),
        title: None,
        description: Some(tool.description().to_string().into()),
        input_schema: Arc::new(tool.input_schema().to_json_object()),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}

/// Run a tool on a blocking worker and render its outcome.
pub async fn execute_blocking(
    tool: Arc<dyn Tool>,
    arguments: Option<FieldMap>,
) -> Result<CallToolResult, McpError> {
    let name = tool.name().to_string();
    debug!("Dispatching tool {}", name);

    tokio::task::spawn_blocking(move || handlers::call_tool(tool.as_ref(), arguments))
        .await
        .map_err(|e| {
            warn!("Tool {} worker failed: {}", name, e);
            McpError::internal_error(format!("tool {name} worker failed: {e}"), None)
        })
}

fn create_route<S>(tool: Arc<dyn Tool>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_mcp_tool(tool.as_ref()), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone();
        let tool = tool.clone();
        async move { execute_blocking(tool, arguments).await }.boxed()
    })
}

/// Build the tool router from every valid registry tool.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .get_tools()
        .into_iter()
        .filter(|tool| match validate_tool(tool.as_ref()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping tool {}: {}", tool.name(), e);
                false
            }
        })
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(tool))
        })
}
