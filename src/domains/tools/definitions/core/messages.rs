//! Message tools.
//!
//! `list_messages` and `create_a_message` form the core conversation loop.
//! The remaining tools here are loaded with the advanced group.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::base::FieldMap;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::factory::{new_delete_tool, new_get_tool, new_list_tool, new_update_tool};
use crate::domains::tools::generic::{has_value, GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    array_property, integer_property, object_property, properties, simple_schema, string_property,
    Properties,
};
use crate::domains::webex::QueryParams;

const MESSAGE_ID: &str = "The unique identifier for the message.";

const RECIPIENT_FIELDS: [&str; 3] = ["roomId", "toPersonId", "toPersonEmail"];
const TEXT_FIELDS: [&str; 3] = ["text", "markdown", "html"];
const ATTACHMENT_FIELDS: [&str; 2] = ["files", "attachments"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_people: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

pub fn list_messages() -> GenericTool<ListMessagesParams> {
    new_list_tool(
        "list_messages",
        "List messages in a room.",
        "/messages",
        properties([
            ("roomId", string_property("List messages in a room, by ID.")),
            ("parentId", string_property("List messages with a parent, by ID.")),
            (
                "mentionedPeople",
                string_property("List messages with these people mentioned."),
            ),
            (
                "before",
                string_property("List messages sent before a date and time (ISO8601 format)."),
            ),
            (
                "beforeMessage",
                string_property("List messages sent before a message, by ID."),
            ),
            (
                "max",
                integer_property("Limit the maximum number of messages in the response."),
            ),
        ]),
        &["roomId"],
    )
}

/// Post a message to exactly one recipient.
///
/// The schema declares no required fields; recipient and content rules are
/// checked before the request is sent.
pub fn create_a_message() -> SimpleTool {
    let attachment = object_property(
        "",
        properties([
            ("contentType", string_property("The content type of the attachment.")),
            (
                "content",
                object_property("The content of the attachment.", Properties::new()),
            ),
        ]),
    );

    let schema = simple_schema(
        "Post a new message to a room or person. Specify either roomId, toPersonId, or toPersonEmail.",
        properties([
            ("roomId", string_property("The room ID of the message.")),
            (
                "toPersonId",
                string_property("The person ID of the recipient when sending a 1:1 message."),
            ),
            (
                "toPersonEmail",
                string_property("The email address of the recipient when sending a 1:1 message."),
            ),
            ("text", string_property("The plain text content of the message.")),
            ("markdown", string_property("The Markdown content of the message.")),
            ("html", string_property("The HTML content of the message.")),
            (
                "files",
                array_property("File URLs to be attached to the message.", string_property("")),
            ),
            (
                "attachments",
                array_property("Content attachments to attach to the message.", attachment),
            ),
            ("parentId", string_property("The parent message to reply to.")),
        ]),
        &[],
    );

    SimpleTool::new(
        "create_a_message",
        "Post a new message to a room or person.",
        schema,
        |params, client| {
            validate_new_message(params)?;
            Ok(client.post("/messages", &Value::Object(params.clone()))?.into())
        },
    )
}

fn validate_new_message(params: &FieldMap) -> ToolResult<()> {
    let recipients = RECIPIENT_FIELDS
        .iter()
        .filter(|field| has_value(params, field))
        .count();

    match recipients {
        0 => {
            return Err(ToolError::validation(
                "exactly one of roomId, toPersonId, or toPersonEmail is required",
            ));
        }
        1 => {}
        _ => {
            return Err(ToolError::validation(
                "only one of roomId, toPersonId, or toPersonEmail should be specified",
            ));
        }
    }

    // Files and attachments count as content whenever present, even if empty.
    let has_content = TEXT_FIELDS.iter().any(|field| has_value(params, field))
        || ATTACHMENT_FIELDS
            .iter()
            .any(|field| params.get(*field).is_some_and(|v| !v.is_null()));

    if !has_content {
        return Err(ToolError::validation(
            "at least one of text, markdown, html, files, or attachments is required",
        ));
    }
    Ok(())
}

pub fn get_message_details() -> SimpleTool {
    new_get_tool(
        "get_message_details",
        "Get details of a message by ID.",
        "/messages",
        "messageId",
        MESSAGE_ID,
    )
}

pub fn update_a_message() -> GenericTool<UpdateMessageParams> {
    new_update_tool(
        "update_a_message",
        "Update a message.",
        "/messages",
        "messageId",
        properties([
            ("messageId", string_property(MESSAGE_ID)),
            ("roomId", string_property("The room ID of the message.")),
            ("text", string_property("The plain text content of the message.")),
            ("markdown", string_property("The Markdown content of the message.")),
        ]),
        &["messageId", "roomId"],
    )
}

pub fn delete_a_message() -> SimpleTool {
    new_delete_tool(
        "delete_a_message",
        "Delete a message.",
        "/messages",
        "messageId",
        MESSAGE_ID,
    )
}

/// List messages of a 1:1 space, by person ID or email.
pub fn list_direct_messages() -> SimpleTool {
    let schema = simple_schema(
        "List messages in a 1:1 space.",
        properties([
            (
                "personId",
                string_property("List messages in a 1:1 room with this person."),
            ),
            (
                "personEmail",
                string_property("List messages in a 1:1 room with this person email."),
            ),
            (
                "max",
                integer_property("Limit the maximum number of messages in the response."),
            ),
        ]),
        &[],
    );

    SimpleTool::new(
        "list_direct_messages",
        "List messages in a 1:1 space.",
        schema,
        |params, client| {
            let query = direct_message_query(params);
            Ok(client.get("/messages/direct", &query)?.into())
        },
    )
}

fn direct_message_query(params: &FieldMap) -> QueryParams {
    let mut query = QueryParams::new();

    for field in ["personId", "personEmail"] {
        if let Some(Value::String(value)) = params.get(field) {
            if !value.is_empty() {
                query.insert(field.to_string(), value.clone());
            }
        }
    }

    // Fractional limits are truncated.
    match params.get("max").and_then(Value::as_f64) {
        Some(max) if max > 0.0 => {
            query.insert("max".to_string(), (max as u64).to_string());
        }
        _ => {}
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::domains::tools::base::{Tool, ToolOutput};
    use crate::domains::tools::testing::StubClient;

    fn message_tool(client: &Arc<StubClient>) -> SimpleTool {
        create_a_message().with_client(client.clone())
    }

    #[test]
    fn test_create_message_posts_params() {
        let client = Arc::new(StubClient::returning(json!({"id": "m1"})));
        let tool = message_tool(&client);

        let output = tool.execute(br#"{"roomId": "r1", "text": "hello"}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"id": "m1"})));

        let calls = client.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].endpoint, "/messages");
        assert_eq!(calls[0].body, Some(json!({"roomId": "r1", "text": "hello"})));
    }

    #[test]
    fn test_create_message_requires_one_recipient() {
        let client = Arc::new(StubClient::default());
        let tool = message_tool(&client);

        let err = tool.execute(br#"{"text": "hello"}"#).unwrap_err();
        assert!(err.to_string().contains("exactly one of roomId"));

        let err = tool
            .execute(br#"{"roomId": "r1", "toPersonEmail": "a@b.c", "text": "hello"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("only one of roomId"));

        // Empty strings do not count as a recipient.
        let err = tool
            .execute(br#"{"roomId": "", "toPersonId": "p1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("at least one of text"));

        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_create_message_accepts_attachments_only() {
        let client = Arc::new(StubClient::returning(json!({"id": "m2"})));
        let tool = message_tool(&client);

        tool.execute(br#"{"toPersonEmail": "a@b.c", "files": []}"#).unwrap();
        tool.execute(br#"{"toPersonId": "p1", "attachments": [{"contentType": "x"}]}"#)
            .unwrap();
        assert_eq!(client.calls().len(), 2);

        let err = tool
            .execute(br#"{"toPersonId": "p1", "files": null}"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("create_a_message failed: at least one of"));
    }

    #[test]
    fn test_create_message_schema_has_no_required_fields() {
        let tool = create_a_message();
        let schema = tool.input_schema();
        assert!(schema.required.is_empty());
        assert!(schema.has_property("attachments"));
    }

    #[test]
    fn test_list_messages_query() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_messages().with_client(client.clone());

        tool.execute(br#"{"roomId": "r1", "max": 10, "parentId": ""}"#).unwrap();
        let query = &client.calls()[0].query;
        assert_eq!(query.len(), 2);
        assert_eq!(query["roomId"], "r1");
        assert_eq!(query["max"], "10");
        assert!(tool.input_schema().is_required("roomId"));
    }

    #[test]
    fn test_list_direct_messages_query() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_direct_messages().with_client(client.clone());

        tool.execute(br#"{"personEmail": "a@b.c", "personId": "", "max": 2.9}"#)
            .unwrap();
        let call = &client.calls()[0];
        assert_eq!(call.endpoint, "/messages/direct");
        assert_eq!(call.query.len(), 2);
        assert_eq!(call.query["personEmail"], "a@b.c");
        assert_eq!(call.query["max"], "2");

        tool.execute(br#"{"max": -1}"#).unwrap();
        assert!(client.calls()[1].query.is_empty());
    }

    #[test]
    fn test_update_message_requires_message_and_room() {
        let tool = update_a_message();
        let schema = tool.input_schema();
        assert_eq!(schema.required, vec!["messageId".to_string(), "roomId".to_string()]);
    }
}
