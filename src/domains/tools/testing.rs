//! Recording client stub for tool tests.

use std::sync::Mutex;

use serde_json::Value;

use crate::domains::webex::{ApiError, ApiResult, Deleter, QueryParams, Reader, Writer};

/// One recorded request.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub endpoint: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

/// Records every request and answers with a fixed response.
#[derive(Default)]
pub struct StubClient {
    response: Value,
    fail_status: Option<u16>,
    calls: Mutex<Vec<Call>>,
}

impl StubClient {
    /// Answer every request with `response`.
    pub fn returning(response: Value) -> Self {
        Self {
            response,
            ..Default::default()
        }
    }

    /// Fail every request with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    /// All requests seen so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        endpoint: &str,
        query: QueryParams,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(Call {
            method,
            endpoint: endpoint.to_string(),
            query,
            body,
        });

        match self.fail_status {
            Some(status) => Err(ApiError::Status {
                status,
                body: format!("stub failure {status}"),
            }),
            None => Ok(self.response.clone()),
        }
    }
}

impl Reader for StubClient {
    fn get(&self, endpoint: &str, params: &QueryParams) -> ApiResult<Value> {
        self.record("GET", endpoint, params.clone(), None)
    }
}

impl Writer for StubClient {
    fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        self.record("POST", endpoint, QueryParams::new(), Some(body.clone()))
    }

    fn put(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        self.record("PUT", endpoint, QueryParams::new(), Some(body.clone()))
    }
}

impl Deleter for StubClient {
    fn delete(&self, endpoint: &str) -> ApiResult<()> {
        self.record("DELETE", endpoint, QueryParams::new(), None).map(|_| ())
    }
}
