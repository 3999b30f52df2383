//! Naming and description rules enforced before a tool is exposed.

use super::base::Tool;
use super::error::{ToolError, ToolResult};

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Names are 1 to 64 characters of lowercase ASCII letters, digits and `_`.
pub fn validate_tool_name(name: &str) -> ToolResult<()> {
    if name.is_empty() {
        return Err(ToolError::validation("tool name cannot be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ToolError::validation(format!(
            "tool name {name} exceeds {MAX_NAME_LEN} characters"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(ToolError::validation(format!(
            "tool name {name} contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Descriptions are non-empty and at most 1024 characters.
pub fn validate_description(description: &str) -> ToolResult<()> {
    if description.is_empty() {
        return Err(ToolError::validation("tool description cannot be empty"));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ToolError::validation(format!(
            "tool description exceeds {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_tool(tool: &dyn Tool) -> ToolResult<()> {
    validate_tool_name(tool.name())?;
    validate_description(tool.description())
}
