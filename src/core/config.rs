//! Server configuration.
//!
//! Everything is read from the process environment, optionally seeded
//! from a `.env` file. Command-line flags are applied on top by the binary.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Environment variable holding the Webex API token.
pub const API_KEY_ENV: &str = "WEBEX_PUBLIC_WORKSPACE_API_KEY";

/// Environment variable overriding the Webex API base URL.
pub const BASE_URL_ENV: &str = "WEBEX_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub transport: TransportConfig,
    pub webex: WebexConfig,
    pub tools: ToolsConfig,
}

/// Identity reported to MCP clients on initialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for the stderr subscriber; `RUST_LOG` directives still apply.
    pub level: String,
}

/// Tool loading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Load the advanced tool group on top of the core group.
    pub all_tools: bool,
}

/// Webex API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct WebexConfig {
    /// Bearer token used for every API call.
    pub api_key: Option<String>,

    /// Base URL every endpoint is appended to.
    pub base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WebexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebexConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for WebexConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl WebexConfig {
    /// Create a configuration with an explicit token and base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: normalize_api_key(&api_key.into()),
            base_url: base_url.into(),
        }
    }

    /// Read the Webex settings from the process environment.
    ///
    /// A missing token is not an error here; it is reported by
    /// [`WebexConfig::validate`] and by client construction.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .and_then(|raw| normalize_api_key(&raw));
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    /// Return the token or a validation error naming the missing variable.
    pub fn require_api_key(&self) -> super::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            super::Error::config(format!("{API_KEY_ENV} environment variable is not set"))
        })
    }

    /// Check that every required setting is present.
    pub fn validate(&self) -> super::Result<()> {
        self.require_api_key().map(|_| ())
    }
}

/// Strip an optional `Bearer ` prefix and surrounding whitespace.
fn normalize_api_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    let key = key.strip_prefix("Bearer ").unwrap_or(key).trim();
    (!key.is_empty()).then(|| key.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "webex-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            webex: WebexConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file before reading the environment.
    ///
    /// An explicit path must exist and parse; the default `.env` lookup in
    /// the working directory is optional.
    pub fn load_dotenv(path: Option<&Path>) -> super::Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    let path = path.display();
                    super::Error::config(format!("error loading .env file from {path}: {e}"))
                })?;
                info!("Loaded environment from {}", path.display());
            }
            None => {
                if let Err(e) = dotenvy::dotenv() {
                    if !e.not_found() {
                        warn!("Error loading .env file: {}", e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Read the `MCP_*` and `WEBEX_*` variables over the defaults.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            server: ServerConfig {
                name: var("MCP_SERVER_NAME").unwrap_or(defaults.server.name),
                version: defaults.server.version,
            },
            logging: LoggingConfig {
                level: var("MCP_LOG_LEVEL").unwrap_or(defaults.logging.level),
            },
            transport: TransportConfig::from_env(),
            webex: WebexConfig::from_env(),
            tools: ToolsConfig {
                all_tools: var("MCP_ALL_TOOLS").is_some_and(|v| is_enabled(&v)),
            },
        }
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

// Serializes every test in the crate that touches process env vars.
#[cfg(test)]
static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_TEST_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
