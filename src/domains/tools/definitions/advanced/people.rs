//! People tools. Creating and removing people requires an admin token.

use serde::{Deserialize, Serialize};

use crate::domains::tools::base::FieldMap;
use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{
    array_property, boolean_property, integer_property, object_property, properties,
    string_property, Properties, Schema,
};

const PERSON_ID: &str = "A unique identifier for the person.";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Profile fields accepted by both create and update.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<FieldMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<FieldMap>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonParams {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(flatten)]
    pub profile: PersonFields,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(flatten)]
    pub profile: PersonFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_enabled: Option<bool>,
}

/// Schema entries for [`PersonFields`], with the given element schemas for
/// phone numbers and addresses.
fn profile_properties(phone_number: Schema, address: Schema) -> Properties {
    properties([
        (
            "emails",
            array_property("The email addresses of the person.", string_property("")),
        ),
        (
            "phoneNumbers",
            array_property("Phone numbers for the person.", phone_number),
        ),
        (
            "extension",
            string_property("The Webex Calling extension of the person."),
        ),
        (
            "locationId",
            string_property("The ID of the location for this person."),
        ),
        ("displayName", string_property("The full name of the person.")),
        ("firstName", string_property("The first name of the person.")),
        ("lastName", string_property("The last name of the person.")),
        (
            "avatar",
            string_property("The URL to the person's avatar in PNG format."),
        ),
        (
            "orgId",
            string_property("The ID of the organization to which this person belongs."),
        ),
        (
            "roles",
            array_property(
                "An array of role strings representing the roles to which this person belongs.",
                string_property(""),
            ),
        ),
        (
            "licenses",
            array_property(
                "An array of license strings allocated to this person.",
                string_property(""),
            ),
        ),
        (
            "department",
            string_property("The business department the user belongs to."),
        ),
        ("manager", string_property("A manager identifier.")),
        ("managerId", string_property("The person ID of the manager.")),
        ("title", string_property("The person's title.")),
        ("addresses", array_property("A person's addresses.", address)),
    ])
}

pub fn list_people() -> GenericTool<ListPeopleParams> {
    new_list_tool(
        "list_people",
        "List people in your organization.",
        "/people",
        properties([
            (
                "email",
                string_property(
                    "List people with this email address. For non-admin requests, require an exact match.",
                ),
            ),
            (
                "displayName",
                string_property(
                    "List people with this display name. For non-admin requests, list people with names starting with this value.",
                ),
            ),
            (
                "id",
                string_property(
                    "List people with this ID. Accepts comma-separated values for bulk lookups.",
                ),
            ),
            (
                "orgId",
                string_property(
                    "List people in this organization. Only admin users can set this parameter.",
                ),
            ),
            (
                "locationId",
                string_property("List people present in this location."),
            ),
            (
                "max",
                integer_property(
                    "Limit the maximum number of people in the response. Default is 100.",
                ),
            ),
        ]),
        &[],
    )
}

pub fn create_a_person() -> GenericTool<CreatePersonParams> {
    let phone_number = object_property(
        "",
        properties([
            ("type", string_property("Phone number type")),
            ("value", string_property("Phone number value")),
        ]),
    );
    let address = object_property(
        "",
        properties([
            ("type", string_property("Address type")),
            ("country", string_property("Country")),
            ("locality", string_property("Locality")),
            ("postalCode", string_property("Postal code")),
            ("region", string_property("Region")),
            ("streetAddress", string_property("Street address")),
        ]),
    );

    new_create_tool(
        "create_a_person",
        "Create a new user account for a given organization. Only an admin can create a new user account.",
        "/people",
        profile_properties(phone_number, address),
        &["emails"],
    )
}

pub fn get_person_details() -> SimpleTool {
    new_get_tool(
        "get_person_details",
        "Shows details for a person by ID.",
        "/people",
        "personId",
        PERSON_ID,
    )
}

pub fn update_a_person() -> GenericTool<UpdatePersonParams> {
    let mut props = profile_properties(
        object_property("Phone number object", Properties::new()),
        object_property("Address object", Properties::new()),
    );
    props.insert("personId".to_string(), string_property(PERSON_ID));
    props.insert(
        "loginEnabled".to_string(),
        boolean_property("Whether the user is allowed to use Webex."),
    );

    new_update_tool(
        "update_a_person",
        "Update details for a person by ID.",
        "/people",
        "personId",
        props,
        &["personId"],
    )
}

pub fn delete_a_person() -> SimpleTool {
    new_delete_tool(
        "delete_a_person",
        "Remove a person from the system. Only an admin can remove a person.",
        "/people",
        "personId",
        PERSON_ID,
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
    fn test_create_person_flattens_profile() {
        let client = Arc::new(StubClient::returning(json!({"id": "p1"})));
        let tool = create_a_person().with_client(client.clone());

        tool.execute(
            br#"{"emails": ["a@b.c"], "displayName": "A B", "addresses": [{"country": "NO"}]}"#,
        )
        .unwrap();

        assert_eq!(
            client.calls()[0].body,
            Some(json!({
                "emails": ["a@b.c"],
                "displayName": "A B",
                "addresses": [{"country": "NO"}]
            }))
        );
    }

    #[test]
    fn test_create_person_schema_nests_address_fields() {
        let tool = create_a_person();
        let schema = tool.input_schema();
        let addresses = &schema.properties.as_ref().unwrap()["addresses"];
        assert!(addresses.items.as_ref().unwrap().has_property("streetAddress"));
        assert!(schema.is_required("emails"));
    }

    #[test]
    fn test_update_person_extracts_id_from_flattened_params() {
        let client = Arc::new(StubClient::returning(json!({"id": "p1"})));
        let tool = update_a_person().with_client(client.clone());

        tool.execute(br#"{"personId": "p1", "loginEnabled": false, "title": "Dr"}"#)
            .unwrap();
        let call = &client.calls()[0];
        assert_eq!(call.endpoint, "/people/p1");
        assert_eq!(
            call.body,
            Some(json!({"personId": "p1", "loginEnabled": false, "title": "Dr"}))
        );
    }

    #[test]
    fn test_list_people_by_email() {
        let client = Arc::new(StubClient::returning(json!({"items": []})));
        let tool = list_people().with_client(client.clone());

        tool.execute(br#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(client.calls()[0].query["email"], "a@b.c");
    }
}
