//! Team membership tools, served under `/team/memberships`.

use serde::{Deserialize, Serialize};

use super::memberships::UpdateMembershipParams;
use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    boolean_property, integer_property, properties, string_property,
};

const ENDPOINT: &str = "/team/memberships";
const MEMBERSHIP_ID: &str = "The unique identifier for the team membership.";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembershipsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMembershipParams {
    #[serde(default)]
    pub team_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

pub fn list_team_memberships() -> GenericTool<ListTeamMembershipsParams> {
    new_list_tool(
        "list_team_memberships",
        "List team memberships for a team.",
        ENDPOINT,
        properties([
            ("teamId", string_property("List memberships for a team, by ID.")),
            (
                "max",
                integer_property("Limit the maximum number of team memberships."),
            ),
        ]),
        &["teamId"],
    )
}

pub fn create_a_team_membership() -> GenericTool<CreateTeamMembershipParams> {
    new_create_tool(
        "create_a_team_membership",
        "Add someone to a team by Person ID or email address.",
        ENDPOINT,
        properties([
            ("teamId", string_property("The team ID.")),
            ("personId", string_property("The person ID.")),
            ("personEmail", string_property("The email address of the person.")),
            (
                "isModerator",
                boolean_property("Whether the person is a team moderator."),
            ),
        ]),
        &["teamId"],
    )
}

pub fn get_team_membership_details() -> SimpleTool {
    new_get_tool(
        "get_team_membership_details",
        "Get details for a team membership by ID.",
        ENDPOINT,
        "membershipId",
        MEMBERSHIP_ID,
    )
}

pub fn update_a_team_membership() -> GenericTool<UpdateMembershipParams> {
    new_update_tool(
        "update_a_team_membership",
        "Update a team membership by ID.",
        ENDPOINT,
        "membershipId",
        properties([
            ("membershipId", string_property(MEMBERSHIP_ID)),
            (
                "isModerator",
                boolean_property("Whether the person is a team moderator."),
            ),
        ]),
        &["membershipId"],
    )
}

pub fn delete_a_team_membership() -> SimpleTool {
    new_delete_tool(
        "delete_a_team_membership",
        "Delete a team membership by ID.",
        ENDPOINT,
        "membershipId",
        MEMBERSHIP_ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::domains::tools::base::Tool;
    use crate::domains::tools::testing::StubClient;

    #[test]
    fn test_team_membership_endpoints() {
        let client = Arc::new(StubClient::returning(json!({})));

        list_team_memberships()
            .with_client(client.clone())
            .execute(br#"{"teamId": "t1"}"#)
            .unwrap();
        delete_a_team_membership()
            .with_client(client.clone())
            .execute(br#"{"membershipId": "tm1"}"#)
            .unwrap();

        let calls = client.calls();
        assert_eq!(calls[0].endpoint, "/team/memberships");
        assert_eq!(calls[0].query["teamId"], "t1");
        assert_eq!(calls[1].endpoint, "/team/memberships/tm1");
    }
}
