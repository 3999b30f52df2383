//! Startup loaders that turn plugin groups into a populated registry.

use tracing::info;

use super::definitions::{advanced, core};
use super::error::ToolResult;
use super::plugin::PluginManager;
use super::registry::ToolRegistry;

/// Load the core group only.
pub fn load_core_tools() -> ToolResult<ToolRegistry> {
    load_with(core::register_plugins)
}

/// Load the core group followed by every advanced group.
pub fn load_all_tools() -> ToolResult<ToolRegistry> {
    load_with(|manager| {
        core::register_plugins(manager);
        advanced::register_plugins(manager);
    })
}

/// Pick the loader for the configured mode.
pub fn load_tools(all_tools: bool) -> ToolResult<ToolRegistry> {
    if all_tools {
        load_all_tools()
    } else {
        load_core_tools()
    }
}

fn load_with(queue: impl FnOnce(&mut PluginManager)) -> ToolResult<ToolRegistry> {
    let mut manager = PluginManager::new();
    queue(&mut manager);

    let mut registry = ToolRegistry::new();
    manager.load_plugins(&mut registry)?;

    info!(
        "Loaded {} tools from {} plugins",
        registry.len(),
        manager.plugins().len()
    );
    Ok(registry)
}
