//! Team tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{integer_property, properties, string_property};

const TEAM_ID: &str = "The unique identifier for the team.";
const NAME: &str = "A user-friendly name for the team.";
const DESCRIPTION: &str = "The description of the team.";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListTeamsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTeamParams {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn list_teams() -> GenericTool<ListTeamsParams> {
    new_list_tool(
        "list_teams",
        "List teams to which the authenticated user belongs.",
        "/teams",
        properties([(
            "max",
            integer_property("Limit the maximum number of teams in the response."),
        )]),
        &[],
    )
}

pub fn create_a_team() -> GenericTool<CreateTeamParams> {
    new_create_tool(
        "create_a_team",
        "Create a new team.",
        "/teams",
        properties([
            ("name", string_property(NAME)),
            ("description", string_property(DESCRIPTION)),
        ]),
        &["name"],
    )
}

pub fn get_team_details() -> SimpleTool {
    new_get_tool(
        "get_team_details",
        "Get details for a team by ID.",
        "/teams",
        "teamId",
        TEAM_ID,
    )
}

pub fn update_a_team() -> GenericTool<UpdateTeamParams> {
    new_update_tool(
        "update_a_team",
        "Update details for a team by ID.",
        "/teams",
        "teamId",
        properties([
            ("teamId", string_property(TEAM_ID)),
            ("name", string_property(NAME)),
            ("description", string_property(DESCRIPTION)),
        ]),
        &["teamId"],
    )
}

pub fn delete_a_team() -> SimpleTool {
    new_delete_tool("delete_a_team", "Delete a team.", "/teams", "teamId", TEAM_ID)
}
