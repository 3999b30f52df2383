//! Webex REST client and the capability traits the tools consume.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::core::config::{API_KEY_ENV, WebexConfig};

/// Flat string-keyed query parameters for GET requests.
pub type QueryParams = BTreeMap<String, String>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs read operations.
pub trait Reader {
    /// GET `endpoint` with the given query parameters.
    fn get(&self, endpoint: &str, params: &QueryParams) -> ApiResult<Value>;
}

/// Performs write operations.
pub trait Writer {
    /// POST a JSON body to `endpoint`.
    fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value>;

    /// PUT a JSON body to `endpoint`.
    fn put(&self, endpoint: &str, body: &Value) -> ApiResult<Value>;
}

/// Performs delete operations.
pub trait Deleter {
    /// DELETE `endpoint`.
    fn delete(&self, endpoint: &str) -> ApiResult<()>;
}

/// The full capability handle a tool executes against.
pub trait HttpClient: Reader + Writer + Deleter + Send + Sync {}

impl<T> HttpClient for T where T: Reader + Writer + Deleter + Send + Sync {}

/// Blocking HTTP client for the Webex API.
///
/// Responses with an empty body decode to [`Value::Null`].
pub struct WebexClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WebexClient {
    /// Build a client scoped to the given configuration.
    pub fn with_config(config: &WebexConfig) -> ApiResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ApiError::configuration(format!("{API_KEY_ENV} environment variable is not set"))
        })?;

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        handle_response(status, &body)
    }

    fn get_request(&self, endpoint: &str, params: &QueryParams) -> RequestBuilder {
        let url = build_simple_url(&self.base_url, endpoint);
        let query = present_params(params);
        debug!("GET {} {:?}", url, query);
        self.http.get(url).query(&query)
    }

    fn send_json(&self, request: RequestBuilder, body: &Value) -> ApiResult<Value> {
        let payload = serde_json::to_vec(body)?;
        self.send(request.header(CONTENT_TYPE, "application/json").body(payload))
    }
}

impl Reader for WebexClient {
    fn get(&self, endpoint: &str, params: &QueryParams) -> ApiResult<Value> {
        self.send(self.get_request(endpoint, params))
    }
}

impl Writer for WebexClient {
    fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        let url = build_simple_url(&self.base_url, endpoint);
        debug!("POST {}", url);
        self.send_json(self.http.post(url), body)
    }

    fn put(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        let url = build_simple_url(&self.base_url, endpoint);
        debug!("PUT {}", url);
        self.send_json(self.http.put(url), body)
    }
}

impl Deleter for WebexClient {
    fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let url = build_simple_url(&self.base_url, endpoint);
        debug!("DELETE {}", url);
        self.send(self.http.delete(url)).map(|_| ())
    }
}

/// Join the base URL and endpoint, adding the separating slash if missing.
fn build_simple_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.is_empty() || endpoint.starts_with('/') {
        format!("{base_url}{endpoint}")
    } else {
        format!("{base_url}/{endpoint}")
    }
}

/// Query pairs with a non-empty value.
fn present_params(params: &QueryParams) -> Vec<(&str, &str)> {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

/// Translate a status code and raw body into a JSON value or an error.
fn handle_response(status: u16, body: &str) -> ApiResult<Value> {
    if status >= 400 {
        let body = match serde_json::from_str::<Value>(body) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => body.to_string(),
        };
        return Err(ApiError::Status { status, body });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://webexapis.com/v1";

    #[test]
    fn test_build_simple_url_adds_slash() {
        assert_eq!(build_simple_url(BASE, "rooms"), format!("{BASE}/rooms"));
        assert_eq!(build_simple_url(BASE, "/rooms"), format!("{BASE}/rooms"));
    }

    fn get_url(endpoint: &str, params: &[(&str, &str)]) -> String {
        let client = WebexClient::with_config(&WebexConfig::new("token", BASE)).unwrap();
        let params: QueryParams = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request = client.get_request(endpoint, &params).build().unwrap();
        request.url().to_string()
    }

    #[test]
    fn test_get_request_skips_empty_values() {
        let url = get_url("/rooms", &[("max", "5"), ("type", "")]);
        assert_eq!(url, format!("{BASE}/rooms?max=5"));
        assert_eq!(get_url("/rooms", &[("type", "")]), format!("{BASE}/rooms"));
    }

    #[test]
    fn test_get_request_encodes_values() {
        let url = get_url("/people", &[("email", "a+b@example.com")]);
        assert_eq!(url, format!("{BASE}/people?email=a%2Bb%40example.com"));
    }

    #[test]
    fn test_handle_response_empty_body_is_null() {
        assert_eq!(handle_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_handle_response_parses_json() {
        let value = handle_response(200, r#"{"items": []}"#).unwrap();
        assert_eq!(value, json!({"items": []}));
    }

    #[test]
    fn test_handle_response_error_status() {
        let body = r#"{"message": "The requested resource could not be found."}"#;
        let err = handle_response(404, body).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("could not be found"));

        let err = handle_response(401, "Unauthorized").unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_with_config_requires_api_key() {
        let result = WebexClient::with_config(&WebexConfig::default());
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }
}
