//! Tools domain module.
//!
//! Tools are the operations MCP clients can call. Each tool maps one HTTP
//! verb on one Webex REST endpoint and carries its own input schema.
//!
//! ## Architecture
//!
//! - `schema.rs` - JSON Schema fragments for tool inputs
//! - `base.rs` - the `Tool` trait, outputs, and lazy client resolution
//! - `generic.rs` - `GenericTool<T>` (typed params) and `SimpleTool` (field map)
//! - `factory.rs` - list/get/create/update/delete tool constructors
//! - `registry.rs` - name-keyed tool table
//! - `plugin.rs` - plugins and the `PluginManager`
//! - `loader.rs` - core and all-tools startup loaders
//! - `definitions/` - the Webex tool declarations, grouped into plugins
//! - `router.rs` / `handlers.rs` - exposure through the rmcp `ToolRouter`
//!
//! ## Adding a New Tool
//!
//! 1. Declare it in the matching resource file under `definitions/`,
//!    usually with one of the `factory` constructors
//! 2. Add it to a plugin's tool list in that group's `mod.rs`
//!
//! The router and the HTTP transport pick it up from the registry.

mod base;
pub mod definitions;
mod error;
pub mod factory;
mod generic;
mod handlers;
mod loader;
mod plugin;
mod registry;
pub mod router;
pub mod schema;
#[cfg(test)]
pub(crate) mod testing;
mod validation;

pub use base::{
    initialize_default_client, must_initialize_default_client, FieldMap, Tool, ToolBase,
    ToolOutput,
};
pub use error::{ToolError, ToolResult};
pub use generic::{
    has_value, item_path, query_params, require_id, to_field_map, GenericTool, SimpleTool,
};
pub use handlers::*;
pub use loader::{load_all_tools, load_core_tools, load_tools};
pub use plugin::{register_all, shared, PluginManager, StaticPlugin, ToolPlugin};
pub use registry::ToolRegistry;
pub use router::{build_tool_router, execute_blocking, to_mcp_tool};
pub use validation::{validate_description, validate_tool, validate_tool_name};
