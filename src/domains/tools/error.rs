//! Tool-specific error types.

use thiserror::Error;

use crate::domains::webex::ApiError;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while declaring, registering, or executing tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The input could not be decoded into the tool's parameter shape.
    #[error("invalid arguments format: {0}. Please check the tool schema for required fields")]
    InvalidArguments(#[source] serde_json::Error),

    /// A required field was absent, null, or empty after decoding.
    #[error("{field} {reason}")]
    MissingField { field: String, reason: &'static str },

    /// The capability handle could not be created.
    #[error("service initialization failed: {0}. Please check your API credentials")]
    ServiceInitialization(#[source] ApiError),

    /// A tool with the same name is already registered.
    #[error("tool {0} already registered")]
    DuplicateTool(String),

    /// The executor of the named tool failed.
    #[error("{tool} failed: {source}")]
    Execution {
        tool: String,
        #[source]
        source: Box<ToolError>,
    },

    /// The remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Parameters could not be converted through their wire encoding.
    #[error("failed to encode parameters: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Executor-level validation failure.
    #[error("{0}")]
    Validation(String),
}

impl ToolError {
    /// Create a "field is required" error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: "is required",
        }
    }

    /// Create a "field cannot be empty" error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: "cannot be empty",
        }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap an executor failure with the name of the tool that raised it.
    pub fn execution(tool: impl Into<String>, source: ToolError) -> Self {
        Self::Execution {
            tool: tool.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through `Execution` wrappers.
    pub fn root_cause(&self) -> &ToolError {
        match self {
            Self::Execution { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the root cause is a missing or empty field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.root_cause(), Self::MissingField { .. })
    }

    /// The API error at the root of this failure, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root_cause() {
            Self::Api(e) | Self::ServiceInitialization(e) => Some(e),
            _ => None,
        }
    }
}
