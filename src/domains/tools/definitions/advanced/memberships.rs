//! Room membership tools.
//!
//! Bot tokens only see memberships of rooms the bot belongs to, and cannot
//! filter by `personId` or `personEmail`.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    boolean_property, integer_property, properties, string_property,
};

const MEMBERSHIP_ID: &str = "The unique identifier for the membership.";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembershipsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipParams {
    #[serde(default)]
    pub room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

/// Shared by room and team membership updates.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembershipParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

pub fn list_memberships() -> GenericTool<ListMembershipsParams> {
    new_list_tool(
        "list_memberships",
        "List room memberships. Bot tokens can only list memberships in rooms where they are members.",
        "/memberships",
        properties([
            (
                "roomId",
                string_property(
                    "List memberships in a room, by room ID. Bot tokens can only list memberships in rooms where they are members.",
                ),
            ),
            (
                "personId",
                string_property(
                    "List memberships for a person, by person ID. Note: This parameter does not work with bot tokens.",
                ),
            ),
            (
                "personEmail",
                string_property(
                    "List memberships for a person, by email address. Note: This parameter does not work with bot tokens.",
                ),
            ),
            ("max", integer_property("Limit the maximum number of memberships.")),
        ]),
        &[],
    )
}

pub fn create_a_membership() -> GenericTool<CreateMembershipParams> {
    new_create_tool(
        "create_a_membership",
        "Add someone to a room by Person ID or email address.",
        "/memberships",
        properties([
            ("roomId", string_property("The room ID.")),
            ("personId", string_property("The person ID.")),
            ("personEmail", string_property("The email address of the person.")),
            (
                "isModerator",
                boolean_property("Whether the person is a room moderator."),
            ),
        ]),
        &["roomId"],
    )
}

pub fn get_membership_details() -> SimpleTool {
    new_get_tool(
        "get_membership_details",
        "Get details for a membership by ID.",
        "/memberships",
        "membershipId",
        MEMBERSHIP_ID,
    )
}

pub fn update_a_membership() -> GenericTool<UpdateMembershipParams> {
    new_update_tool(
        "update_a_membership",
        "Update properties for a membership by ID.",
        "/memberships",
        "membershipId",
        properties([
            ("membershipId", string_property(MEMBERSHIP_ID)),
            (
                "isModerator",
                boolean_property("Whether the person is a room moderator."),
            ),
        ]),
        &["membershipId"],
    )
}

pub fn delete_a_membership() -> SimpleTool {
    new_delete_tool(
        "delete_a_membership",
        "Delete a membership by ID.",
        "/memberships",
        "membershipId",
        MEMBERSHIP_ID,
    )
}
