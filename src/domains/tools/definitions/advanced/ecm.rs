//! Enterprise content management folder links (`/rooms/linkedFolders`).

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{new_create_tool, new_get_tool};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{properties, string_property};

const ENDPOINT: &str = "/rooms/linkedFolders";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEcmFolderParams {
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub folder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

pub fn create_an_ecm_folder_configuration() -> GenericTool<CreateEcmFolderParams> {
    new_create_tool(
        "create_an_ecm_folder_configuration",
        "Create an ECM folder configuration",
        ENDPOINT,
        properties([
            ("roomId", string_property("A unique identifier for the room.")),
            ("folderId", string_property("The ECM folder ID.")),
            (
                "displayName",
                string_property("A user-friendly name for the ECM folder."),
            ),
        ]),
        &["roomId", "folderId"],
    )
}

pub fn get_ecm_folder_details() -> SimpleTool {
    new_get_tool(
        "get_ecm_folder_details",
        "Get details for an ECM folder by ID.",
        ENDPOINT,
        "folderId",
        "The unique identifier for the ECM folder.",
    )
}
