//! Webex REST client domain.
//!
//! The tool layer never talks to reqwest directly. It consumes the
//! capability traits defined in `client.rs`:
//!
//! - [`Reader`] - GET with query parameters
//! - [`Writer`] - POST and PUT with a JSON body
//! - [`Deleter`] - DELETE
//!
//! [`WebexClient`] is the production implementation; tests substitute
//! their own recording stubs.

mod client;
mod error;

pub use client::{Deleter, HttpClient, QueryParams, Reader, WebexClient, Writer};
pub use error::{ApiError, ApiResult};
