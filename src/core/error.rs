//! Crate-level error type.
//!
//! Each domain keeps its own error enum; this one wraps them so startup code
//! and the binary can use a single `Result`.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::tools::ToolError;
use crate::domains::webex::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Declaring, registering or running a tool failed.
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Webex API error: {0}")]
    Api(#[from] ApiError),

    /// Missing or malformed settings, including the API credential.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
