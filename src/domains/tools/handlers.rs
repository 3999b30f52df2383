//! Tool handlers - turn tool outcomes into protocol results.
//!
//! Tool failures never become protocol errors; they are rendered as
//! `is_error` results so the client can read and act on the message.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use super::base::{FieldMap, Tool, ToolOutput};
use super::error::{ToolError, ToolResult};

pub const SUCCESS_MESSAGE: &str = "Operation completed successfully";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found. Please verify the ID or name.";
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication failed. Please check your API credentials.";

/// Render a successful output as a single text content block.
///
/// Empty output and a bare `{"success": true}` both read as a plain
/// confirmation. Strings pass through, other JSON is pretty-printed.
pub fn success_result(output: ToolOutput) -> CallToolResult {
    let text = match output {
        ToolOutput::Empty => SUCCESS_MESSAGE.to_string(),
        ToolOutput::Text(text) => text,
        ToolOutput::Json(value) if is_bare_success(&value) => SUCCESS_MESSAGE.to_string(),
        ToolOutput::Json(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
    };
    CallToolResult::success(vec![Content::text(text)])
}

/// Render a failure, with friendlier wording for missing resources and
/// rejected credentials.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("Tool call failed: {}", error);
    CallToolResult::error(vec![Content::text(error_message(error))])
}

/// The text shown to the client for a failed call.
pub fn error_message(error: &ToolError) -> String {
    match error.api_error() {
        Some(api) if api.is_not_found() => NOT_FOUND_MESSAGE.to_string(),
        Some(api) if api.is_unauthorized() => UNAUTHORIZED_MESSAGE.to_string(),
        _ => format!("Tool execution failed: {error}"),
    }
}

pub fn render(result: ToolResult<ToolOutput>) -> CallToolResult {
    match result {
        Ok(output) => success_result(output),
        Err(e) => error_result(&e),
    }
}

/// Execute `tool` with protocol arguments and render the outcome.
///
/// Blocking; callers on the async runtime run this on a blocking worker.
pub fn call_tool(tool: &dyn Tool, arguments: Option<FieldMap>) -> CallToolResult {
    render(tool.execute_with_map(&arguments.unwrap_or_default()))
}

fn is_bare_success(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.len() == 1 && map.get("success") == Some(&Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::webex::ApiError;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_success_rendering() {
        let empty = success_result(ToolOutput::Empty);
        assert_eq!(text_of(&empty), SUCCESS_MESSAGE);
        assert!(!empty.is_error.unwrap_or(false));

        let deleted = success_result(ToolOutput::Json(json!({"success": true})));
        assert_eq!(text_of(&deleted), SUCCESS_MESSAGE);

        let text = success_result(ToolOutput::Text("plain".to_string()));
        assert_eq!(text_of(&text), "plain");

        let object = success_result(ToolOutput::Json(json!({"id": "r1"})));
        assert_eq!(text_of(&object), "{\n  \"id\": \"r1\"\n}");

        let not_bare = success_result(ToolOutput::Json(json!({"success": true, "id": "x"})));
        assert_ne!(text_of(&not_bare), SUCCESS_MESSAGE);
    }

    #[test]
    fn test_error_rendering() {
        let not_found = ToolError::execution(
            "get_room_details",
            ToolError::Api(ApiError::Status {
                status: 404,
                body: "{}".to_string(),
            }),
        );
        let result = error_result(&not_found);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), NOT_FOUND_MESSAGE);

        let unauthorized = ToolError::execution(
            "list_rooms",
            ToolError::Api(ApiError::Status {
                status: 401,
                body: String::new(),
            }),
        );
        assert_eq!(error_message(&unauthorized), UNAUTHORIZED_MESSAGE);

        let missing = ToolError::execution("get_room_details", ToolError::missing_field("roomId"));
        assert_eq!(
            error_message(&missing),
            "Tool execution failed: get_room_details failed: roomId is required"
        );
    }
}
