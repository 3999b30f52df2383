//! Advanced tools: everything beyond the conversation essentials.

pub mod attachments;
pub mod ecm;
pub mod events;
pub mod memberships;
pub mod people;
pub mod room_tabs;
pub mod rooms;
pub mod team_memberships;
pub mod teams;

use std::sync::Arc;

use super::core::{messages, webhooks};
use super::PLUGIN_VERSION;
use crate::domains::tools::base::Tool;
use crate::domains::tools::plugin::{shared, PluginManager, StaticPlugin};

pub const MESSAGING: StaticPlugin =
    StaticPlugin::new("advanced-messaging", PLUGIN_VERSION, messaging_tools);
pub const ROOMS: StaticPlugin = StaticPlugin::new("advanced-rooms", PLUGIN_VERSION, room_tools);
pub const PEOPLE: StaticPlugin =
    StaticPlugin::new("advanced-people", PLUGIN_VERSION, people_tools);
pub const MEMBERSHIP: StaticPlugin =
    StaticPlugin::new("advanced-membership", PLUGIN_VERSION, membership_tools);
pub const TEAMS: StaticPlugin = StaticPlugin::new("advanced-teams", PLUGIN_VERSION, team_tools);
pub const MISC: StaticPlugin = StaticPlugin::new("advanced-misc", PLUGIN_VERSION, misc_tools);

/// Queue the advanced plugins.
pub fn register_plugins(manager: &mut PluginManager) {
    for plugin in [MESSAGING, ROOMS, PEOPLE, MEMBERSHIP, TEAMS, MISC] {
        manager.register_plugin(plugin);
    }
}

/// Message and webhook operations the core group leaves out.
fn messaging_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(messages::get_message_details()),
        shared(messages::update_a_message()),
        shared(messages::delete_a_message()),
        shared(messages::list_direct_messages()),
        shared(webhooks::get_webhook_details()),
        shared(webhooks::update_a_webhook()),
        shared(webhooks::delete_a_webhook()),
    ]
}

fn room_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(rooms::create_a_room()),
        shared(rooms::get_room_details()),
        shared(rooms::update_a_room()),
        shared(rooms::delete_a_room()),
        shared(rooms::get_room_meeting_details()),
    ]
}

fn people_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(people::list_people()),
        shared(people::create_a_person()),
        shared(people::get_person_details()),
        shared(people::update_a_person()),
        shared(people::delete_a_person()),
    ]
}

fn membership_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(memberships::list_memberships()),
        shared(memberships::create_a_membership()),
        shared(memberships::get_membership_details()),
        shared(memberships::update_a_membership()),
        shared(memberships::delete_a_membership()),
        shared(team_memberships::list_team_memberships()),
        shared(team_memberships::create_a_team_membership()),
        shared(team_memberships::get_team_membership_details()),
        shared(team_memberships::update_a_team_membership()),
        shared(team_memberships::delete_a_team_membership()),
    ]
}

fn team_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(teams::list_teams()),
        shared(teams::create_a_team()),
        shared(teams::get_team_details()),
        shared(teams::update_a_team()),
        shared(teams::delete_a_team()),
    ]
}

fn misc_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        shared(room_tabs::list_room_tabs()),
        shared(room_tabs::create_a_room_tab()),
        shared(room_tabs::get_room_tab_details()),
        shared(room_tabs::update_a_room_tab()),
        shared(room_tabs::delete_a_room_tab()),
        shared(attachments::create_an_attachment_action()),
        shared(attachments::get_attachment_action_details()),
        shared(events::list_events()),
        shared(events::get_event_details()),
        shared(ecm::create_an_ecm_folder_configuration()),
        shared(ecm::get_ecm_folder_details()),
    ]
}
