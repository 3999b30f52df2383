//! Compliance event tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{new_get_tool, new_list_tool};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{integer_property, properties, string_property};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

pub fn list_events() -> GenericTool<ListEventsParams> {
    new_list_tool(
        "list_events",
        "List events in your organization.",
        "/events",
        properties([
            (
                "resource",
                string_property(
                    "List events related to this resource. Possible values: messages, memberships, etc.",
                ),
            ),
            (
                "type",
                string_property(
                    "List events of this type. Possible values: created, updated, deleted.",
                ),
            ),
            (
                "actorId",
                string_property("List events performed by this person, by ID."),
            ),
            (
                "from",
                string_property(
                    "List events which occurred after this date and time (ISO8601 format).",
                ),
            ),
            (
                "to",
                string_property(
                    "List events which occurred before this date and time (ISO8601 format).",
                ),
            ),
            (
                "max",
                integer_property("Limit the maximum number of events in the response."),
            ),
        ]),
        &[],
    )
}

pub fn get_event_details() -> SimpleTool {
    new_get_tool(
        "get_event_details",
        "Get details for an event by ID.",
        "/events",
        "eventId",
        "The unique identifier for the event.",
    )
}
