//! Generic tool implementations.
//!
//! [`GenericTool`] decodes its input into a typed parameter struct before
//! calling its executor; [`SimpleTool`] decodes into an untyped
//! [`FieldMap`]. Both share the same pipeline:
//!
//! 1. decode the input (`InvalidArguments` on failure)
//! 2. resolve the client (`ServiceInitialization` on failure)
//! 3. run the executor (failures wrapped with the tool name)

use std::marker::PhantomData;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::base::{FieldMap, Tool, ToolBase, ToolOutput};
use super::error::{ToolError, ToolResult};
use super::schema::Schema;
use crate::core::config::WebexConfig;
use crate::domains::webex::{HttpClient, QueryParams};

/// Executor bound to a typed parameter shape.
pub type Executor<T> = Box<dyn Fn(&T, &dyn HttpClient) -> ToolResult<ToolOutput> + Send + Sync>;

/// Executor over an untyped field map.
pub type MapExecutor = Executor<FieldMap>;

/// Run an executor and wrap any failure with the tool's name.
fn run_executor<P>(
    base: &ToolBase,
    params: &P,
    executor: &(dyn Fn(&P, &dyn HttpClient) -> ToolResult<ToolOutput> + Send + Sync),
) -> ToolResult<ToolOutput> {
    let client = base.client_for_call()?;
    debug!("Executing tool {}", base.name());
    executor(params, client.as_ref()).map_err(|e| {
        warn!("Tool {} failed: {}", base.name(), e);
        ToolError::execution(base.name(), e)
    })
}

// ============================================================================
// GenericTool
// ============================================================================

/// A tool whose input decodes into `T`.
pub struct GenericTool<T> {
    base: ToolBase,
    executor: Executor<T>,
    _params: PhantomData<fn() -> T>,
}

impl<T> GenericTool<T>
where
    T: DeserializeOwned,
{
    /// Bind `executor` to a name, description and schema.
    pub fn new<F>(name: &str, description: &str, schema: Schema, executor: F) -> Self
    where
        F: Fn(&T, &dyn HttpClient) -> ToolResult<ToolOutput> + Send + Sync + 'static,
    {
        Self {
            base: ToolBase::new(name, description, schema),
            executor: Box::new(executor),
            _params: PhantomData,
        }
    }

    /// Use a pinned configuration instead of the process-wide client.
    pub fn with_config(mut self, config: Arc<WebexConfig>) -> Self {
        self.base.set_config(config);
        self
    }

    /// Use an already constructed client.
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.base.set_client(client);
        self
    }
}

impl<T> Tool for GenericTool<T>
where
    T: DeserializeOwned,
{
    fn name(&self) -> &str {
        self.base.name()
    }

    fn description(&self) -> &str {
        self.base.description()
    }

    fn input_schema(&self) -> &Schema {
        self.base.schema()
    }

    fn execute(&self, args: &[u8]) -> ToolResult<ToolOutput> {
        let params: T = serde_json::from_slice(args).map_err(ToolError::InvalidArguments)?;
        run_executor(&self.base, &params, self.executor.as_ref())
    }
}

// ============================================================================
// SimpleTool
// ============================================================================

/// A tool whose input decodes into an untyped field map.
pub struct SimpleTool {
    base: ToolBase,
    executor: MapExecutor,
}

impl SimpleTool {
    /// Bind `executor` to a name, description and schema.
    pub fn new<F>(name: &str, description: &str, schema: Schema, executor: F) -> Self
    where
        F: Fn(&FieldMap, &dyn HttpClient) -> ToolResult<ToolOutput> + Send + Sync + 'static,
    {
        Self {
            base: ToolBase::new(name, description, schema),
            executor: Box::new(executor),
        }
    }

    /// Use a pinned configuration instead of the process-wide client.
    pub fn with_config(mut self, config: Arc<WebexConfig>) -> Self {
        self.base.set_config(config);
        self
    }

    /// Use an already constructed client.
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.base.set_client(client);
        self
    }
}

impl Tool for SimpleTool {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn description(&self) -> &str {
        self.base.description()
    }

    fn input_schema(&self) -> &Schema {
        self.base.schema()
    }

    fn execute(&self, args: &[u8]) -> ToolResult<ToolOutput> {
        // Empty input means "no arguments"; `null` decodes the same way.
        let params: FieldMap = if args.iter().all(u8::is_ascii_whitespace) {
            FieldMap::new()
        } else {
            serde_json::from_slice::<Option<FieldMap>>(args)
                .map_err(ToolError::InvalidArguments)?
                .unwrap_or_default()
        };
        run_executor(&self.base, &params, self.executor.as_ref())
    }
}

// ============================================================================
// Field map helpers
// ============================================================================

/// Round-trip typed parameters through their wire encoding into a field map.
pub fn to_field_map<T: Serialize>(params: &T) -> ToolResult<FieldMap> {
    match serde_json::to_value(params).map_err(ToolError::Encoding)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(FieldMap::new()),
        other => Err(ToolError::validation(format!(
            "parameters must encode to an object, got {other}"
        ))),
    }
}

/// Derive query parameters from a field map.
///
/// `null`, empty strings and zero numbers are dropped. An explicit `false`
/// is kept. Arrays and objects are sent as compact JSON.
pub fn query_params(fields: &FieldMap) -> QueryParams {
    fields
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) if s.is_empty() => return None,
                Value::String(s) => s.clone(),
                Value::Number(n) if n.as_f64() == Some(0.0) => return None,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => other.to_string(),
            };
            Some((key.clone(), text))
        })
        .collect()
}

/// Extract a non-empty identifier from a field map.
pub fn require_id(fields: &FieldMap, field: &str) -> ToolResult<String> {
    let id = match fields.get(field) {
        None | Some(Value::Null) => return Err(ToolError::missing_field(field)),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if id.is_empty() {
        return Err(ToolError::empty_field(field));
    }
    Ok(id)
}

// RFC 3986 unreserved characters pass through; everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Join `endpoint` and `id` as `{endpoint}/{id}`, escaping the id so it
/// stays a single path segment.
///
/// Dot segments are rejected: URL parsing would resolve them even when
/// escaped.
pub fn item_path(endpoint: &str, id: &str) -> ToolResult<String> {
    if id == "." || id == ".." {
        return Err(ToolError::validation(format!("invalid id {id:?}")));
    }
    Ok(format!("{endpoint}/{}", utf8_percent_encode(id, PATH_SEGMENT)))
}

/// True when `field` holds something other than null or an empty string.
pub fn has_value(fields: &FieldMap, field: &str) -> bool {
    match fields.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
