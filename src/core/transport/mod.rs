//! Transports the MCP server can be served on.
//!
//! | feature | transport | session model |
//! |---------|-----------|---------------|
//! | `stdio` (default) | stdin/stdout | one client, handled by rmcp |
//! | `tcp` | line-delimited JSON-RPC | one rmcp session per connection |
//! | `http` | JSON-RPC over POST (axum) | stateless, handled here |
//!
//! STDIO and TCP route tool calls through the server's rmcp `ToolRouter`.
//! HTTP calls [`McpServer::list_tools`](crate::core::McpServer::list_tools)
//! and [`McpServer::call_tool`](crate::core::McpServer::call_tool) directly.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
