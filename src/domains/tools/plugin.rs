//! Tool plugins - named, versioned bundles of tools.
//!
//! A plugin registers a fixed list of tools into a [`ToolRegistry`]. The
//! [`PluginManager`] applies an ordered list of plugins and stops at the
//! first failure; tools registered before the failure stay registered.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::base::Tool;
use super::error::ToolResult;
use super::registry::ToolRegistry;

/// A named, versioned registration procedure.
pub trait ToolPlugin: Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// Register every tool this plugin provides.
    fn register(&self, registry: &mut ToolRegistry) -> ToolResult<()>;
}

/// Erase a concrete tool into the shared handle plugins hand out.
pub fn shared<T: Tool + 'static>(tool: T) -> Arc<dyn Tool> {
    Arc::new(tool)
}

/// Register `tools` in order, stopping at the first rejection.
pub fn register_all(
    registry: &mut ToolRegistry,
    tools: impl IntoIterator<Item = Arc<dyn Tool>>,
) -> ToolResult<()> {
    tools.into_iter().try_for_each(|tool| registry.register(tool))
}

/// A plugin whose tool list comes from a constructor function.
#[derive(Debug, Clone, Copy)]
pub struct StaticPlugin {
    name: &'static str,
    version: &'static str,
    tools: fn() -> Vec<Arc<dyn Tool>>,
}

impl StaticPlugin {
    pub const fn new(
        name: &'static str,
        version: &'static str,
        tools: fn() -> Vec<Arc<dyn Tool>>,
    ) -> Self {
        Self {
            name,
            version,
            tools,
        }
    }
}

impl ToolPlugin for StaticPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn version(&self) -> &str {
        self.version
    }

    fn register(&self, registry: &mut ToolRegistry) -> ToolResult<()> {
        register_all(registry, (self.tools)())
    }
}

/// Ordered list of plugins.
///
/// Not meant for concurrent use; build it, load it, drop it.
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<Box<dyn ToolPlugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin. A repeated plugin name is accepted with a warning.
    pub fn register_plugin<P>(&mut self, plugin: P)
    where
        P: ToolPlugin + 'static,
    {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            warn!("Plugin {} registered more than once", plugin.name());
        }
        debug!("Queued plugin {} v{}", plugin.name(), plugin.version());
        self.plugins.push(Box::new(plugin));
    }

    /// Apply every plugin in order; the first failure aborts.
    pub fn load_plugins(&self, registry: &mut ToolRegistry) -> ToolResult<()> {
        for plugin in &self.plugins {
            let before = registry.len();
            if let Err(e) = plugin.register(registry) {
                warn!("Plugin {} failed to load: {}", plugin.name(), e);
                return Err(e);
            }
            info!(
                "Loaded plugin {} v{} ({} tools)",
                plugin.name(),
                plugin.version(),
                registry.len() - before
            );
        }
        Ok(())
    }

    pub fn plugins(&self) -> &[Box<dyn ToolPlugin>] {
        &self.plugins
    }
}
