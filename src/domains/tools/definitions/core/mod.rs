//! Core tools: the minimum a bot needs to hold a conversation.
//!
//! - `core-messaging`: read incoming messages, post replies
//! - `core-webhooks`: receive new messages
//! - `core-info`: bot identity and room discovery

pub mod info;
pub mod messages;
pub mod webhooks;

use std::sync::Arc;

use super::PLUGIN_VERSION;
use crate::domains::tools::base::Tool;
use crate::domains::tools::plugin::{shared, PluginManager, StaticPlugin};

pub const MESSAGING: StaticPlugin =
    StaticPlugin::new("core-messaging", PLUGIN_VERSION, messaging_tools);
pub const WEBHOOKS: StaticPlugin =
    StaticPlugin::new("core-webhooks", PLUGIN_VERSION, webhook_tools);
pub const INFO: StaticPlugin = StaticPlugin::new("core-info", PLUGIN_VERSION, info_tools);

/// Queue the core plugins.
pub fn register_plugins(manager: &mut PluginManager) {
    for plugin in [MESSAGING, WEBHOOKS, INFO] {
        manager.register_plugin(plugin);
    }
}

fn messaging_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(messages::list_messages()),
        shared(messages::create_a_message()),
    ]
}

fn webhook_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(webhooks::create_a_webhook()),
        shared(webhooks::list_webhooks()),
    ]
}

fn info_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(info::list_rooms()),
        shared(info::get_my_own_details()),
    ]
}
