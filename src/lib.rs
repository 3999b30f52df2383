//! Webex MCP server library.
//!
//! Exposes the Webex messaging REST API to Model Context Protocol clients
//! as a set of tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and its
//!   transports (stdio, tcp, http)
//! - **domains**
//!   - **webex**: blocking REST client behind read/write/delete capabilities
//!   - **tools**: the tool abstraction, CRUD tool factories, the plugin
//!     registry and the Webex tool declarations
//!
//! Tools are grouped into plugins. The core group (messages, webhooks,
//! rooms listing, own profile) is always loaded; the advanced group is
//! added with `--all-tools`.
//!
//! # Example
//!
//! ```rust,no_run
//! use webex_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::from_config(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
