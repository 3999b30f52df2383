//! Webhook tools.

use serde::{Deserialize, Serialize};

use crate::domains::tools::factory::{
    new_create_tool, new_delete_tool, new_get_tool, new_list_tool, new_update_tool,
};
use crate::domains::tools::generic::{GenericTool, SimpleTool};
use crate::domains::tools::schema::{integer_property, properties, string_property};

const WEBHOOK_ID: &str = "The unique identifier for the webhook.";
const NAME: &str = "A user-friendly name for the webhook.";
const TARGET_URL: &str = "The URL that receives POST requests for each event.";
const SECRET: &str = "The secret used to generate payload signature.";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListWebhooksParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target_url: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub fn list_webhooks() -> GenericTool<ListWebhooksParams> {
    new_list_tool(
        "list_webhooks",
        "List all of your webhooks.",
        "/webhooks",
        properties([(
            "max",
            integer_property("Limit the maximum number of webhooks in the response."),
        )]),
        &[],
    )
}

pub fn create_a_webhook() -> GenericTool<CreateWebhookParams> {
    new_create_tool(
        "create_a_webhook",
        "Create a webhook.",
        "/webhooks",
        properties([
            ("name", string_property(NAME)),
            ("targetUrl", string_property(TARGET_URL)),
            (
                "resource",
                string_property(
                    "The resource type for the webhook. Possible values: messages, memberships, etc.",
                ),
            ),
            (
                "event",
                string_property(
                    "The event type for the webhook. Possible values: created, updated, deleted.",
                ),
            ),
            ("filter", string_property("The filter that defines the webhook scope.")),
            ("secret", string_property(SECRET)),
        ]),
        &["name", "targetUrl", "resource", "event"],
    )
}

pub fn get_webhook_details() -> SimpleTool {
    new_get_tool(
        "get_webhook_details",
        "Get details for a webhook by ID.",
        "/webhooks",
        "webhookId",
        WEBHOOK_ID,
    )
}

pub fn update_a_webhook() -> GenericTool<UpdateWebhookParams> {
    new_update_tool(
        "update_a_webhook",
        "Update a webhook by ID.",
        "/webhooks",
        "webhookId",
        properties([
            ("webhookId", string_property(WEBHOOK_ID)),
            ("name", string_property(NAME)),
            ("targetUrl", string_property(TARGET_URL)),
            ("secret", string_property(SECRET)),
            (
                "status",
                string_property(
                    "The status of the webhook. Use 'active' to reactivate a disabled webhook.",
                ),
            ),
        ]),
        &["webhookId"],
    )
}

pub fn delete_a_webhook() -> SimpleTool {
    new_delete_tool(
        "delete_a_webhook",
        "Delete a webhook by ID.",
        "/webhooks",
        "webhookId",
        WEBHOOK_ID,
    )
}
