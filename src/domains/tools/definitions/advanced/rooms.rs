//! Room management tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_update_tool,
};
use crate::domains::tools::generic::{item_path, require_id, GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    boolean_property, properties, simple_schema, string_property, Schema,
};
use crate::domains::webex::QueryParams;

const ROOM_ID: &str = "The unique identifier for the room.";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomParams {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_announcement_only: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_announcement_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
}

/// Room flags shared by create and update.
fn room_flags() -> [(&'static str, Schema); 4] {
    [
        (
            "isLocked",
            boolean_property("Whether the room is locked (moderator approval required)."),
        ),
        (
            "isPublic",
            boolean_property("Whether the room is public (allows guest users)."),
        ),
        ("description", string_property("The description of the room.")),
        (
            "isAnnouncementOnly",
            boolean_property("Whether the room is announcement only."),
        ),
    ]
}

pub fn create_a_room() -> GenericTool<CreateRoomParams> {
    let mut props = properties([
        ("title", string_property("A user-friendly name for the room.")),
        (
            "teamId",
            string_property("The ID for the team with which this room is associated."),
        ),
        (
            "classificationId",
            string_property("The classification ID for the room."),
        ),
    ]);
    props.extend(properties(room_flags()));

    new_create_tool(
        "create_a_room",
        "Create a new Webex room.",
        "/rooms",
        props,
        &["title"],
    )
}

pub fn get_room_details() -> SimpleTool {
    new_get_tool(
        "get_room_details",
        "Get details of a specific room.",
        "/rooms",
        "roomId",
        ROOM_ID,
    )
}

pub fn update_a_room() -> GenericTool<UpdateRoomParams> {
    let mut props = properties([
        ("roomId", string_property(ROOM_ID)),
        ("title", string_property("A user-friendly name for the room.")),
        (
            "classificationId",
            string_property("The classification ID for the room."),
        ),
        (
            "teamId",
            string_property("The teamId to which this room belongs."),
        ),
        ("isReadOnly", boolean_property("Whether the room is read only.")),
    ]);
    props.extend(properties(room_flags()));

    new_update_tool(
        "update_a_room",
        "Update a room.",
        "/rooms",
        "roomId",
        props,
        &["roomId"],
    )
}

pub fn delete_a_room() -> SimpleTool {
    new_delete_tool("delete_a_room", "Delete a room.", "/rooms", "roomId", ROOM_ID)
}

/// `GET /rooms/{roomId}/meetingInfo`.
pub fn get_room_meeting_details() -> SimpleTool {
    const DESCRIPTION: &str = "Get meeting details for a room.";

    SimpleTool::new(
        "get_room_meeting_details",
        DESCRIPTION,
        simple_schema(
            DESCRIPTION,
            properties([("roomId", string_property(ROOM_ID))]),
            &["roomId"],
        ),
        |params, client| {
            let room_id = require_id(params, "roomId")?;
            let endpoint = format!("{}/meetingInfo", item_path("/rooms", &room_id)?);
            Ok(client.get(&endpoint, &QueryParams::new())?.into())
        },
    )
}
