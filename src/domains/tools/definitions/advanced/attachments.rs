//! Attachment action tools (adaptive card submissions).

use serde::{Deserialize, Serialize};

use crate::domains::tools::base::FieldMap;
use crate::domains::tools::factory::{new_create_tool, new_get_tool};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{object_property, properties, string_property, Properties};

const ENDPOINT: &str = "/attachment/actions";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentActionParams {
    #[serde(default, rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<FieldMap>,
}

pub fn create_an_attachment_action() -> GenericTool<CreateAttachmentActionParams> {
    new_create_tool(
        "create_an_attachment_action",
        "Create an attachment action",
        ENDPOINT,
        properties([
            ("type", string_property("The type of action.")),
            ("messageId", string_property("The ID of the message with attachment.")),
            (
                "inputs",
                object_property("The attachment action's inputs.", Properties::new()),
            ),
        ]),
        &["type", "messageId"],
    )
}

pub fn get_attachment_action_details() -> SimpleTool {
    new_get_tool(
        "get_attachment_action_details",
        "Get details for an attachment action by ID.",
        ENDPOINT,
        "attachmentActionId",
        "The unique identifier for the attachment action.",
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
    fn test_submit_card_inputs() {
        let client = Arc::new(StubClient::returning(json!({"id": "a1"})));
        let tool = create_an_attachment_action().with_client(client.clone());

        tool.execute(br#"{"type": "submit", "messageId": "m1", "inputs": {"answer": "yes"}}"#)
            .unwrap();
        let call = &client.calls()[0];
        assert_eq!(call.endpoint, "/attachment/actions");
        assert_eq!(
            call.body,
            Some(json!({"type": "submit", "messageId": "m1", "inputs": {"answer": "yes"}}))
        );
    }
}
