//! Room tab tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{properties, string_property};

const ENDPOINT: &str = "/roomTabs";
const ROOM_TAB_ID: &str = "The unique identifier for the room tab.";
const CONTENT_URL: &str = "URL of the tab content.";
const DISPLAY_NAME: &str = "User-friendly name for the tab.";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomTabsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTabParams {
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub content_url: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomTabParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_tab_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

pub fn list_room_tabs() -> GenericTool<ListRoomTabsParams> {
    new_list_tool(
        "list_room_tabs",
        "List tabs for a room.",
        ENDPOINT,
        properties([("roomId", string_property("List tabs for a room, by room ID."))]),
        &["roomId"],
    )
}

pub fn create_a_room_tab() -> GenericTool<CreateRoomTabParams> {
    new_create_tool(
        "create_a_room_tab",
        "Add a tab to a room.",
        ENDPOINT,
        properties([
            ("roomId", string_property("The room ID.")),
            ("contentUrl", string_property(CONTENT_URL)),
            ("displayName", string_property(DISPLAY_NAME)),
        ]),
        &["roomId", "contentUrl", "displayName"],
    )
}

pub fn get_room_tab_details() -> SimpleTool {
    new_get_tool(
        "get_room_tab_details",
        "Get details for a room tab by ID.",
        ENDPOINT,
        "roomTabId",
        ROOM_TAB_ID,
    )
}

pub fn update_a_room_tab() -> GenericTool<UpdateRoomTabParams> {
    new_update_tool(
        "update_a_room_tab",
        "Update a room tab by ID.",
        ENDPOINT,
        "roomTabId",
        properties([
            ("roomTabId", string_property(ROOM_TAB_ID)),
            ("contentUrl", string_property(CONTENT_URL)),
            ("displayName", string_property(DISPLAY_NAME)),
        ]),
        &["roomTabId"],
    )
}

pub fn delete_a_room_tab() -> SimpleTool {
    new_delete_tool(
        "delete_a_room_tab",
        "Delete a room tab by ID.",
        ENDPOINT,
        "roomTabId",
        ROOM_TAB_ID,
    )
}
