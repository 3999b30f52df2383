//! Domains module containing the server's business logic.
//!
//! - `webex`: the blocking REST client for the Webex API
//! - `tools`: tool abstractions, the plugin registry and the Webex tool set

pub mod tools;
pub mod webex;
