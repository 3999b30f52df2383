//! Core module containing shared infrastructure components.
//!
//! Configuration, the crate error type, the MCP server handler and the
//! transports it can be served on.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, WebexConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
