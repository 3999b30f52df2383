//! Identity and room discovery tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::new_list_tool;
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    integer_property, properties, simple_schema, string_property, Properties,
};
use crate::domains::webex::QueryParams;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

pub fn list_rooms() -> GenericTool<ListRoomsParams> {
    new_list_tool(
        "list_rooms",
        "List rooms visible to the authenticated user.",
        "/rooms",
        properties([
            (
                "teamId",
                string_property("List rooms associated with a team, by ID."),
            ),
            ("type", string_property("direct (1:1), group (group space).")),
            (
                "sortBy",
                string_property("Sort results. Possible values: id, lastactivity, created."),
            ),
            (
                "max",
                integer_property("Limit the maximum number of rooms in the response."),
            ),
        ]),
        &[],
    )
}

/// `GET /people/me`, the identity behind the configured token.
pub fn get_my_own_details() -> SimpleTool {
    const DESCRIPTION: &str = "Get details for the authenticated user.";

    SimpleTool::new(
        "get_my_own_details",
        DESCRIPTION,
        simple_schema(DESCRIPTION, Properties::new(), &[]),
        |_params, client| Ok(client.get("/people/me", &QueryParams::new())?.into()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::domains::tools::base::{Tool, ToolOutput};
    use crate::domains::tools::testing::StubClient;

    #[test]
    fn test_get_my_own_details_ignores_arguments() {
        let client = Arc::new(StubClient::returning(json!({"id": "me", "displayName": "Bot"})));
        let tool = get_my_own_details().with_client(client.clone());

        let output = tool.execute(br#"{"unused": true}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"id": "me", "displayName": "Bot"})));

        let call = &client.calls()[0];
        assert_eq!(call.method, "GET");
        assert_eq!(call.endpoint, "/people/me");
        assert!(call.query.is_empty());
    }

    #[test]
    fn test_list_rooms_type_filter() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_rooms().with_client(client.clone());

        tool.execute(br#"{"type": "group", "max": 0}"#).unwrap();
        let query = &client.calls()[0].query;
        assert_eq!(query.len(), 1);
        assert_eq!(query["type"], "group");
    }
}
