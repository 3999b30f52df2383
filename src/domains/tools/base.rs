//! The tool capability and the state every tool shares.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use serde_json::Value;
use tracing::{debug, info};

use super::error::{ToolError, ToolResult};
use super::schema::Schema;
use crate::core::config::WebexConfig;
use crate::domains::webex::{ApiResult, HttpClient, WebexClient};

/// Untyped field map, the wire-level intermediate representation.
pub type FieldMap = serde_json::Map<String, Value>;

/// Result of a successful tool execution.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// The operation completed without a payload.
    Empty,
    /// A plain text payload.
    Text(String),
    /// A JSON payload, usually an object returned by the API.
    Json(Value),
}

impl ToolOutput {
    /// Convert back to a JSON value (`null` for [`ToolOutput::Empty`]).
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Text(text) => Value::String(text),
            Self::Json(value) => value,
        }
    }
}

impl From<Value> for ToolOutput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(text) => Self::Text(text),
            other => Self::Json(other),
        }
    }
}

/// One callable operation.
///
/// `execute_with_map` is defined as "encode, then `execute`", so both entry
/// points behave identically for equivalent input.
pub trait Tool: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Object schema describing accepted fields.
    fn input_schema(&self) -> &Schema;

    /// Execute with raw JSON-encoded arguments.
    fn execute(&self, args: &[u8]) -> ToolResult<ToolOutput>;

    /// Execute with an already decoded field map.
    fn execute_with_map(&self, args: &FieldMap) -> ToolResult<ToolOutput> {
        let bytes = serde_json::to_vec(args).map_err(ToolError::InvalidArguments)?;
        self.execute(&bytes)
    }
}

// ============================================================================
// Lazily built client handles
// ============================================================================

/// A client handle that is built at most once.
///
/// Concurrent first callers serialize on `init`, so only one of them runs
/// the builder. A failed build leaves the slot empty for the next caller.
pub(crate) struct ClientSlot {
    cell: OnceLock<Arc<dyn HttpClient>>,
    init: Mutex<()>,
}

impl ClientSlot {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    fn filled(client: Arc<dyn HttpClient>) -> Self {
        Self {
            cell: OnceLock::from(client),
            init: Mutex::new(()),
        }
    }

    pub(crate) fn get(&self) -> Option<Arc<dyn HttpClient>> {
        self.cell.get().cloned()
    }

    pub(crate) fn get_or_try_init<E>(
        &self,
        build: impl FnOnce() -> Result<Arc<dyn HttpClient>, E>,
    ) -> Result<Arc<dyn HttpClient>, E> {
        if let Some(client) = self.get() {
            return Ok(client);
        }

        // A panicking builder stored nothing, so the guard is still usable.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = self.get() {
            return Ok(client);
        }

        let client = build()?;
        Ok(self.cell.get_or_init(|| client).clone())
    }
}

static DEFAULT_CLIENT: ClientSlot = ClientSlot::new();

fn default_client_from_env() -> ApiResult<Arc<dyn HttpClient>> {
    let config = WebexConfig::from_env();
    let client = WebexClient::with_config(&config)?;
    info!("Default Webex client initialized for {}", config.base_url);
    Ok(Arc::new(client))
}

/// Build the shared client from the process environment, once.
///
/// Failures are not cached; the next call retries with whatever
/// configuration is then available. Read-only after the first success.
pub fn initialize_default_client() -> ApiResult<Arc<dyn HttpClient>> {
    DEFAULT_CLIENT.get_or_try_init(default_client_from_env)
}

/// Initialize the shared client or abort the process.
///
/// Called once by the binary at startup, where a missing credential is
/// fatal. Must run on a thread that may block.
pub fn must_initialize_default_client() {
    if let Err(e) = initialize_default_client() {
        panic!("failed to initialize default client: {e}");
    }
}

// ============================================================================
// ToolBase
// ============================================================================

/// State shared by every tool implementation.
///
/// The client handle is created at most once, on first execution, and then
/// reused for the lifetime of the tool.
pub struct ToolBase {
    name: String,
    description: String,
    schema: Schema,
    config: Option<Arc<WebexConfig>>,
    client: ClientSlot,
}

impl ToolBase {
    /// Create a base that resolves the process-wide default client.
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            config: None,
            client: ClientSlot::new(),
        }
    }

    /// Pin a configuration; the tool builds its own client from it.
    pub fn set_config(&mut self, config: Arc<WebexConfig>) {
        self.config = Some(config);
    }

    /// Pin an already constructed client.
    pub fn set_client(&mut self, client: Arc<dyn HttpClient>) {
        self.client = ClientSlot::filled(client);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Resolve the client handle, creating it on first use.
    pub fn ensure_client(&self) -> ToolResult<Arc<dyn HttpClient>> {
        let client = self.client.get_or_try_init(|| -> ApiResult<Arc<dyn HttpClient>> {
            match &self.config {
                Some(config) => {
                    debug!("Building pinned client for tool {}", self.name);
                    Ok(Arc::new(WebexClient::with_config(config)?))
                }
                None => initialize_default_client(),
            }
        })?;
        Ok(client)
    }

    /// Like [`ToolBase::ensure_client`], mapping failures to
    /// [`ToolError::ServiceInitialization`].
    pub(crate) fn client_for_call(&self) -> ToolResult<Arc<dyn HttpClient>> {
        self.ensure_client().map_err(|e| match e {
            ToolError::Api(api) => ToolError::ServiceInitialization(api),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    use crate::core::config::{env_test_lock, API_KEY_ENV, BASE_URL_ENV};
    use crate::domains::tools::generic::SimpleTool;
    use crate::domains::tools::schema::{simple_schema, Properties};
    use crate::domains::tools::testing::StubClient;
    use crate::domains::webex::ApiError;
    use serde_json::json;

    const THREADS: usize = 8;

    fn empty_schema() -> Schema {
        simple_schema("List.", Properties::new(), &[])
    }

    /// Run `f` on `THREADS` threads released together.
    fn race<T: Send>(f: impl Fn() -> T + Sync) -> Vec<T> {
        let barrier = Barrier::new(THREADS);
        thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        f()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
    }

    fn all_same(clients: &[Arc<dyn HttpClient>]) -> bool {
        clients.iter().all(|c| Arc::ptr_eq(c, &clients[0]))
    }

    fn set_env(key: &str, value: Option<&str>) {
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_output_from_value() {
        assert_eq!(ToolOutput::from(Value::Null), ToolOutput::Empty);
        assert_eq!(ToolOutput::from(json!("done")), ToolOutput::Text("done".to_string()));
        assert_eq!(
            ToolOutput::from(json!({"id": "1"})),
            ToolOutput::Json(json!({"id": "1"}))
        );
    }

    #[test]
    fn test_pinned_config_without_key_fails() {
        let mut base = ToolBase::new("list_x", "List x.", empty_schema());
        base.set_config(Arc::new(WebexConfig::default()));

        let err = base.client_for_call().err().unwrap();
        assert!(matches!(err, ToolError::ServiceInitialization(ApiError::Configuration(_))));
        // Nothing cached on failure.
        assert!(base.client.get().is_none());
    }

    #[test]
    fn test_pinned_config_builds_client_once() {
        let mut base = ToolBase::new("list_x", "List x.", empty_schema());
        base.set_config(Arc::new(WebexConfig::new("token", "http://127.0.0.1:9/v1")));

        let first = base.ensure_client().unwrap();
        let second = base.ensure_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_slot_builds_once_under_contention() {
        let slot = ClientSlot::new();
        let builds = AtomicUsize::new(0);

        let clients = race(|| {
            slot.get_or_try_init(|| {
                builds.fetch_add(1, Ordering::SeqCst);
                thread::sleep(std::time::Duration::from_millis(20));
                Ok::<_, ApiError>(Arc::new(StubClient::default()) as Arc<dyn HttpClient>)
            })
            .unwrap()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(all_same(&clients));
    }

    #[test]
    fn test_slot_does_not_cache_failures() {
        let slot = ClientSlot::new();

        let err = slot
            .get_or_try_init(|| Err(ApiError::configuration("no key")))
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(slot.get().is_none());

        let client = slot
            .get_or_try_init(|| {
                Ok::<_, ApiError>(Arc::new(StubClient::default()) as Arc<dyn HttpClient>)
            })
            .unwrap();
        assert!(Arc::ptr_eq(&client, &slot.get().unwrap()));
    }

    #[test]
    fn test_pinned_config_concurrent_first_calls_share_client() {
        let mut base = ToolBase::new("list_x", "List x.", empty_schema());
        base.set_config(Arc::new(WebexConfig::new("token", "http://127.0.0.1:9/v1")));

        let clients = race(|| base.ensure_client().unwrap());
        assert!(all_same(&clients));
    }

    #[test]
    fn test_default_client_from_env_needs_key() {
        let _lock = env_test_lock();
        let slot = ClientSlot::new();

        set_env(API_KEY_ENV, None);
        let err = slot.get_or_try_init(default_client_from_env).err().unwrap();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(slot.get().is_none());

        set_env(API_KEY_ENV, Some("token"));
        set_env(BASE_URL_ENV, Some("http://127.0.0.1:9/v1"));
        let first = slot.get_or_try_init(default_client_from_env).unwrap();
        let second = slot.get_or_try_init(default_client_from_env).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        set_env(API_KEY_ENV, None);
        set_env(BASE_URL_ENV, None);
    }

    #[test]
    fn test_unpinned_tool_without_key_reports_service_initialization() {
        let _lock = env_test_lock();
        set_env(API_KEY_ENV, None);
        let base = ToolBase::new("list_x", "List x.", empty_schema());

        // Only meaningful while no earlier test has filled the shared client.
        if DEFAULT_CLIENT.get().is_none() {
            let err = base.client_for_call().err().unwrap();
            assert!(matches!(
                err,
                ToolError::ServiceInitialization(ApiError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_default_client_shared_by_unpinned_tools() {
        let _lock = env_test_lock();
        set_env(API_KEY_ENV, Some("token"));
        set_env(BASE_URL_ENV, Some("http://127.0.0.1:9/v1"));

        let defaults = race(|| initialize_default_client().unwrap());
        assert!(all_same(&defaults));
        must_initialize_default_client();

        let base = ToolBase::new("list_x", "List x.", empty_schema());
        let clients = race(|| base.ensure_client().unwrap());
        assert!(all_same(&clients));
        assert!(Arc::ptr_eq(&clients[0], &defaults[0]));
        assert!(Arc::ptr_eq(&initialize_default_client().unwrap(), &defaults[0]));

        set_env(API_KEY_ENV, None);
        set_env(BASE_URL_ENV, None);
    }

    #[test]
    fn test_tool_without_pinned_client_executes() {
        let _lock = env_test_lock();
        set_env(API_KEY_ENV, Some("token"));
        set_env(BASE_URL_ENV, Some("http://127.0.0.1:9/v1"));

        let tool = SimpleTool::new("echo_x", "Echo x.", empty_schema(), |params, _client| {
            Ok(ToolOutput::Json(Value::Object(params.clone())))
        });
        let output = tool.execute(br#"{"a":1}"#).unwrap();
        assert_eq!(output, ToolOutput::Json(json!({"a": 1})));

        set_env(API_KEY_ENV, None);
        set_env(BASE_URL_ENV, None);
    }
}
