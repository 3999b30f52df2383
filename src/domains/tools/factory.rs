//! Factories for the common CRUD tool shapes.
//!
//! Each factory turns an endpoint plus field declarations into a ready
//! tool. Identifier extraction always goes through the wire encoding, so
//! the identifier name given here must match the serialized field name of
//! the parameter struct.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::base::ToolOutput;
use super::error::ToolError;
use super::generic::{
    item_path, query_params, require_id, to_field_map, GenericTool, SimpleTool,
};
use super::schema::{simple_schema, string_property, Properties};

const UPDATE_ID_DESCRIPTION: &str = "The ID of the item to update";

/// GET `endpoint` with query parameters derived from the typed params.
pub fn new_list_tool<T>(
    name: &str,
    description: &str,
    endpoint: &str,
    properties: Properties,
    required: &[&str],
) -> GenericTool<T>
where
    T: DeserializeOwned + Serialize + 'static,
{
    let schema = simple_schema("List items from the API endpoint.", properties, required);
    let endpoint = endpoint.to_string();

    GenericTool::new(name, description, schema, move |params: &T, client| {
        let fields = to_field_map(params)?;
        let query = query_params(&fields);
        Ok(client.get(&endpoint, &query)?.into())
    })
}

/// GET `endpoint/{id}`.
pub fn new_get_tool(
    name: &str,
    description: &str,
    endpoint: &str,
    id_field: &str,
    id_description: &str,
) -> SimpleTool {
    let schema = simple_schema(
        "Get a specific item by ID.",
        single_property(id_field, id_description),
        &[id_field],
    );
    let endpoint = endpoint.to_string();
    let id_field = id_field.to_string();

    SimpleTool::new(name, description, schema, move |params, client| {
        let id = require_id(params, &id_field)?;
        let path = item_path(&endpoint, &id)?;
        Ok(client.get(&path, &Default::default())?.into())
    })
}

/// POST the typed params to `endpoint`.
pub fn new_create_tool<T>(
    name: &str,
    description: &str,
    endpoint: &str,
    properties: Properties,
    required: &[&str],
) -> GenericTool<T>
where
    T: DeserializeOwned + Serialize + 'static,
{
    let schema = simple_schema("Create a new item.", properties, required);
    let endpoint = endpoint.to_string();

    GenericTool::new(name, description, schema, move |params: &T, client| {
        let body = serde_json::to_value(params).map_err(ToolError::Encoding)?;
        Ok(client.post(&endpoint, &body)?.into())
    })
}

/// PUT the typed params to `endpoint/{id}`.
///
/// The identifier is always declared and always required, prepended to
/// `required` when the caller left it out.
pub fn new_update_tool<T>(
    name: &str,
    description: &str,
    endpoint: &str,
    id_field: &str,
    mut properties: Properties,
    required: &[&str],
) -> GenericTool<T>
where
    T: DeserializeOwned + Serialize + 'static,
{
    properties
        .entry(id_field.to_string())
        .or_insert_with(|| string_property(UPDATE_ID_DESCRIPTION));

    let mut all_required: Vec<&str> = Vec::with_capacity(required.len() + 1);
    if !required.contains(&id_field) {
        all_required.push(id_field);
    }
    all_required.extend_from_slice(required);

    let schema = simple_schema("Update an existing item.", properties, &all_required);
    let endpoint = endpoint.to_string();
    let id_field = id_field.to_string();

    GenericTool::new(name, description, schema, move |params: &T, client| {
        let fields = to_field_map(params)?;
        let id = require_id(&fields, &id_field)?;
        let path = item_path(&endpoint, &id)?;
        let body = serde_json::Value::Object(fields);
        Ok(client.put(&path, &body)?.into())
    })
}

/// DELETE `endpoint/{id}` and report `{"success": true}`.
pub fn new_delete_tool(
    name: &str,
    description: &str,
    endpoint: &str,
    id_field: &str,
    id_description: &str,
) -> SimpleTool {
    let schema = simple_schema(
        "Delete an item by ID.",
        single_property(id_field, id_description),
        &[id_field],
    );
    let endpoint = endpoint.to_string();
    let id_field = id_field.to_string();

    SimpleTool::new(name, description, schema, move |params, client| {
        let id = require_id(params, &id_field)?;
        client.delete(&item_path(&endpoint, &id)?)?;
        Ok(ToolOutput::Json(json!({"success": true})))
    })
}

fn single_property(field: &str, description: &str) -> Properties {
    let mut properties = Properties::new();
    properties.insert(field.to_string(), string_property(description));
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde::Deserialize;
    use serde_json::Value;

    use crate::domains::tools::base::Tool;
    use crate::domains::tools::schema::{integer_property, properties};
    use crate::domains::tools::testing::StubClient;
    use crate::domains::webex::QueryParams;

    #[derive(Debug, Serialize, Deserialize)]
    struct ListXParams {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct CreateXParams {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct UpdateXParams {
        #[serde(default)]
        x_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    }

    fn list_x(client: Arc<StubClient>) -> GenericTool<ListXParams> {
        new_list_tool(
            "list_x",
            "List x.",
            "/x",
            properties([("max", integer_property("Maximum results."))]),
            &[],
        )
        .with_client(client)
    }

    fn get_x(client: Arc<StubClient>) -> SimpleTool {
        new_get_tool("get_x", "Get x.", "/x", "xId", "The x.").with_client(client)
    }

    fn create_x(client: Arc<StubClient>) -> GenericTool<CreateXParams> {
        new_create_tool(
            "create_x",
            "Create x.",
            "/x",
            properties([("name", string_property("Name."))]),
            &["name"],
        )
        .with_client(client)
    }

    fn delete_x(client: Arc<StubClient>) -> SimpleTool {
        new_delete_tool("delete_x", "Delete x.", "/x", "xId", "The x.").with_client(client)
    }

    fn update_x(required: &[&str], client: Arc<StubClient>) -> GenericTool<UpdateXParams> {
        new_update_tool(
            "update_x",
            "Update x.",
            "/x",
            "xId",
            properties([("title", string_property("Title."))]),
            required,
        )
        .with_client(client)
    }

    #[test]
    fn test_list_tool_issues_get_with_query() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_x(client.clone());

        let output = tool.execute(br#"{"max": 5}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"items": []})));

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "GET");
        assert_eq!(calls[0].endpoint, "/x");
        let expected: QueryParams = [("max".to_string(), "5".to_string())].into_iter().collect();
        assert_eq!(calls[0].query, expected);
    }

    #[test]
    fn test_list_tool_drops_zero_max() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_x(client.clone());

        tool.execute(br#"{"max": 0}"#).unwrap();
        assert!(client.calls()[0].query.is_empty());
    }

    #[test]
    fn test_get_tool_builds_id_path() {
        let client = Arc::new(StubClient::returning(json!({"id": "42"})));
        let tool = get_x(client.clone());

        let output = tool.execute(br#"{"xId": "42"}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"id": "42"})));
        assert_eq!(client.calls()[0].endpoint, "/x/42");
        assert!(tool.input_schema().is_required("xId"));
    }

    #[test]
    fn test_get_and_delete_reject_missing_id_before_network() {
        let client = Arc::new(StubClient::default());
        let get = get_x(client.clone());
        let delete = delete_x(client.clone());

        for args in [r#"{}"#, r#"{"xId": null}"#, r#"{"xId": ""}"#] {
            let err = get.execute(args.as_bytes()).unwrap_err();
            assert!(err.is_missing_field(), "get with {args}: {err}");
            let err = delete.execute(args.as_bytes()).unwrap_err();
            assert!(err.is_missing_field(), "delete with {args}: {err}");
        }
        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_delete_tool_reports_success() {
        let client = Arc::new(StubClient::default());
        let tool = delete_x(client.clone());

        let output = tool.execute(br#"{"xId": "42"}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"success": true})));

        let calls = client.calls();
        assert_eq!(calls[0].method, "DELETE");
        assert_eq!(calls[0].endpoint, "/x/42");
    }

    #[test]
    fn test_create_tool_posts_typed_params() {
        let client = Arc::new(StubClient::returning(json!({"id": "new"})));
        let tool = create_x(client.clone());

        tool.execute(br#"{"name": "demo", "extra": "ignored"}"#).unwrap();
        let calls = client.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].endpoint, "/x");
        assert_eq!(calls[0].body, Some(json!({"name": "demo"})));
    }

    #[test]
    fn test_update_tool_schema_always_requires_id() {
        let client = Arc::new(StubClient::default());

        let without = update_x(&["title"], client.clone());
        let schema = without.input_schema();
        assert!(schema.has_property("xId"));
        assert_eq!(schema.required, vec!["xId".to_string(), "title".to_string()]);

        let with = update_x(&["xId", "title"], client);
        let schema = with.input_schema();
        assert_eq!(schema.required, vec!["xId".to_string(), "title".to_string()]);
    }

    #[test]
    fn test_update_tool_puts_to_id_path() {
        let client = Arc::new(StubClient::returning(json!({"id": "7", "title": "new"})));
        let tool = update_x(&[], client.clone());

        tool.execute(br#"{"xId": "7", "title": "new"}"#).unwrap();
        let calls = client.calls();
        assert_eq!(calls[0].method, "PUT");
        assert_eq!(calls[0].endpoint, "/x/7");
        assert_eq!(calls[0].body, Some(json!({"xId": "7", "title": "new"})));
    }

    #[test]
    fn test_update_tool_empty_id_fails() {
        let client = Arc::new(StubClient::default());
        let tool = update_x(&[], client.clone());

        let err = tool.execute(br#"{"title": "new"}"#).unwrap_err();
        assert!(err.is_missing_field());
        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_api_errors_wrapped_with_tool_name() {
        let client = Arc::new(StubClient::failing(404));
        let tool = get_x(client);

        let err = tool.execute(br#"{"xId": "1"}"#).unwrap_err();
        assert!(err.to_string().starts_with("get_x failed: "));
        assert!(err.api_error().is_some_and(|e| e.is_not_found()));
    }

    #[test]
    fn test_id_is_escaped_into_one_path_segment() {
        let client = Arc::new(StubClient::returning(json!({"ok": true})));
        let args = br#"{"xId": "9/members?max=1"}"#;

        get_x(client.clone()).execute(args).unwrap();
        update_x(&[], client.clone()).execute(args).unwrap();
        delete_x(client.clone()).execute(args).unwrap();

        for call in client.calls() {
            assert_eq!(call.endpoint, "/x/9%2Fmembers%3Fmax%3D1", "{}", call.method);
            assert!(call.query.is_empty());
        }

        let err = get_x(client.clone()).execute(br#"{"xId": ".."}"#).unwrap_err();
        assert!(err.to_string().starts_with("get_x failed: invalid id"));
        assert_eq!(client.calls().len(), 3);
    }

    #[test]
    fn test_bytes_and_map_entry_points_agree() {
        let client = Arc::new(StubClient::returning(json!({"ok": true})));
        let tools: Vec<Box<dyn Tool>> = vec![
            Box::new(list_x(client.clone())),
            Box::new(get_x(client.clone())),
            Box::new(create_x(client.clone())),
            Box::new(update_x(&[], client.clone())),
            Box::new(delete_x(client.clone())),
        ];
        let args = json!({"xId": "9", "max": 3, "name": "demo"});

        for tool in &tools {
            let from_bytes = tool.execute(args.to_string().as_bytes()).unwrap();
            let from_map = tool.execute_with_map(args.as_object().unwrap()).unwrap();
            assert_eq!(from_bytes, from_map, "{}", tool.name());
        }

        // Each tool issued the same request twice.
        let calls = client.calls();
        assert_eq!(calls.len(), tools.len() * 2);
        for pair in calls.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
        assert!(calls.iter().all(|call| call.body.as_ref().is_none_or(Value::is_object)));
    }
}
