//! Tool definitions, grouped into plugins.
//!
//! - `core/` - conversation essentials, loaded by default
//! - `advanced/` - the rest of the Webex API surface, loaded with `--all-tools`
//!
//! Each resource file declares its parameter structs and one constructor
//! per tool; the group's `mod.rs` bundles them into plugins.

pub mod advanced;
pub mod core;

/// Version reported by every built-in plugin.
pub const PLUGIN_VERSION: &str = "1.0.0";
