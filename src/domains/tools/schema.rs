//! Input schema fragments for tool declarations.
//!
//! Schemas are plain JSON Schema objects. Helpers only assemble structure;
//! nothing here validates input.

use std::collections::BTreeMap;

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};

/// Property name to schema fragment.
pub type Properties = BTreeMap<String, Schema>;

/// A JSON Schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Always present on object schemas, even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn typed(schema_type: &str, description: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Whether `name` is declared in this schema's properties.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties
            .as_ref()
            .is_some_and(|props| props.contains_key(name))
    }

    /// Whether `name` is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|field| field == name)
    }

    /// Render as a JSON object for the protocol layer.
    pub fn to_json_object(&self) -> JsonObject {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => JsonObject::new(),
        }
    }
}

/// A string property.
pub fn string_property(description: &str) -> Schema {
    Schema::typed("string", description)
}

/// A non-negative integer property.
pub fn integer_property(description: &str) -> Schema {
    Schema {
        minimum: Some(0.0),
        ..Schema::typed("integer", description)
    }
}

/// A boolean property.
pub fn boolean_property(description: &str) -> Schema {
    Schema::typed("boolean", description)
}

/// An array property whose elements match `items`.
pub fn array_property(description: &str, items: Schema) -> Schema {
    Schema {
        items: Some(Box::new(items)),
        ..Schema::typed("array", description)
    }
}

/// A nested object property.
pub fn object_property(description: &str, properties: Properties) -> Schema {
    Schema {
        properties: Some(properties),
        ..Schema::typed("object", description)
    }
}

/// Assemble a top-level object schema.
///
/// An empty `required` list is left out of the serialized schema.
pub fn simple_schema(description: &str, properties: Properties, required: &[&str]) -> Schema {
    Schema {
        required: required.iter().map(|field| field.to_string()).collect(),
        ..object_property(description, properties)
    }
}

/// Build a [`Properties`] map from `(name, schema)` pairs.
pub fn properties<I>(entries: I) -> Properties
where
    I: IntoIterator<Item = (&'static str, Schema)>,
{
    entries
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_property_has_zero_minimum() {
        let value = serde_json::to_value(integer_property("Limit")).unwrap();
        assert_eq!(value, json!({"type": "integer", "description": "Limit", "minimum": 0.0}));
    }

    #[test]
    fn test_simple_schema_omits_empty_required() {
        let props = properties([("max", integer_property("Max"))]);
        let schema = simple_schema("List items.", props, &[]);
        let value = serde_json::to_value(&schema).unwrap();
        assert!(value.get("required").is_none());
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["max"]["type"], "integer");
    }

    #[test]
    fn test_simple_schema_without_properties_keeps_object_shape() {
        let value = serde_json::to_value(simple_schema("Me.", Properties::new(), &[])).unwrap();
        assert_eq!(value, json!({"type": "object", "description": "Me.", "properties": {}}));
    }

    #[test]
    fn test_nested_array_of_objects() {
        let address = object_property(
            "Address",
            properties([("country", string_property("Country"))]),
        );
        let schema = simple_schema(
            "Create a person.",
            properties([("addresses", array_property("Addresses", address))]),
            &["addresses"],
        );
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["required"], json!(["addresses"]));
        assert_eq!(
            value["properties"]["addresses"]["items"]["properties"]["country"]["type"],
            "string"
        );
    }

    #[test]
    fn test_to_json_object() {
        let schema = simple_schema("Get.", properties([("id", string_property("Id"))]), &["id"]);
        let object = schema.to_json_object();
        assert_eq!(object.get("type"), Some(&json!("object")));
        assert!(schema.has_property("id"));
        assert!(schema.is_required("id"));
    }
}
