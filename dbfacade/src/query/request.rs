use super::QueryPayload;
use crate::engine::AqlBuilder;
use crate::utils::{is_truthy, truthy};
use serde_json::{Map, Value};
use std::fmt;

/// Where the query text of a request comes from.
pub enum QuerySource<'a> {
    /// Query text as given. Expected to be a string, but not checked here.
    Text(Value),
    /// A query builder, rendered once when the payload is built
    Builder(&'a dyn AqlBuilder),
    /// A payload object assembled by the caller, holding at least a `query` key
    Payload(Map<String, Value>),
}

impl<'a> QuerySource<'a> {
    pub fn builder(builder: &'a dyn AqlBuilder) -> Self {
        Self::Builder(builder)
    }

    /// Classifies a JSON value: objects with a `query` key are pre-built
    /// payloads, anything else is query text.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) if map.contains_key("query") => Self::Payload(map),
            other => Self::Text(other),
        }
    }

    pub fn is_payload(&self) -> bool {
        matches!(self, Self::Payload(_))
    }

    /// Query text of a non-payload source, builders rendered.
    pub fn into_text(self) -> Value {
        match self {
            Self::Text(text) => text,
            Self::Builder(builder) => Value::String(builder.to_aql()),
            Self::Payload(mut map) => map.remove("query").unwrap_or_default(),
        }
    }

    /// Base payload for this source: the caller's own payload, or one holding
    /// only the query text.
    fn into_base_payload(self) -> QueryPayload {
        match self {
            Self::Payload(map) => QueryPayload::from_map(map),
            other => QueryPayload::new(other.into_text()),
        }
    }
}

impl fmt::Debug for QuerySource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Builder(builder) => f.debug_tuple("Builder").field(&builder.to_aql()).finish(),
            Self::Payload(map) => f.debug_tuple("Payload").field(map).finish(),
        }
    }
}

impl From<&str> for QuerySource<'_> {
    fn from(text: &str) -> Self {
        Self::Text(Value::String(text.to_owned()))
    }
}

impl From<String> for QuerySource<'_> {
    fn from(text: String) -> Self {
        Self::Text(Value::String(text))
    }
}

impl From<Value> for QuerySource<'_> {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl<'a> From<&'a dyn AqlBuilder> for QuerySource<'a> {
    fn from(builder: &'a dyn AqlBuilder) -> Self {
        Self::Builder(builder)
    }
}

/// Cursor related settings, lifted to the top level of the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorOptions {
    pub count: bool,
    pub batch_size: Option<Value>,
}

impl CursorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    pub fn batch_size(mut self, batch_size: impl Into<Value>) -> Self {
        self.batch_size = Some(batch_size.into());
        self
    }

    /// Reads `count` and `batchSize` out of a JSON object. Falsy entries are
    /// treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            count: value.get("count").is_some_and(is_truthy),
            batch_size: truthy(value.get("batchSize")).cloned(),
        }
    }
}

/// A query call with every optional part named.
///
/// For a [`QuerySource::Payload`] source the payload's own fields are the base,
/// fields set on the request are applied on top of it.
#[derive(Debug)]
pub struct QueryRequest<'a> {
    pub source: QuerySource<'a>,
    pub bind_vars: Option<Value>,
    pub cursor: Option<CursorOptions>,
    pub options: Option<Map<String, Value>>,
}

impl<'a> QueryRequest<'a> {
    pub fn new(source: impl Into<QuerySource<'a>>) -> Self {
        Self {
            source: source.into(),
            bind_vars: None,
            cursor: None,
            options: None,
        }
    }

    pub fn bind_vars(mut self, bind_vars: impl Into<Value>) -> Self {
        self.bind_vars = Some(bind_vars.into());
        self
    }

    /// Adds a single bind variable, turning the bind variables into an object if needed.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        let mut vars = match self.bind_vars.take() {
            Some(Value::Object(vars)) => vars,
            _ => Map::new(),
        };
        vars.insert(name.to_owned(), value.into());
        self.bind_vars = Some(Value::Object(vars));
        self
    }

    pub fn cursor(mut self, cursor: CursorOptions) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn options(mut self, options: Map<String, Value>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options
            .get_or_insert_with(Map::new)
            .insert(key.to_owned(), value.into());
        self
    }

    /// Builds the payload executed by the query engine.
    ///
    /// Bind variables are kept only if truthy. Options, when given, replace the
    /// payload options and their `cache` entry is lifted to the top level. Cursor
    /// options, when given, set `count` and `batchSize`.
    pub fn into_payload(self) -> QueryPayload {
        let mut payload = self.source.into_base_payload();

        if let Some(bind_vars) = self.bind_vars.filter(is_truthy) {
            payload.bind_vars = Some(bind_vars);
        }

        if let Some(options) = self.options {
            payload.cache = truthy(options.get("cache")).cloned();
            payload.options = options;
        }

        if let Some(cursor) = self.cursor {
            payload.count = cursor.count;
            payload.batch_size = cursor.batch_size.filter(is_truthy);
        }

        payload
    }

    /// Builds the payload handed to explain and profile runs.
    ///
    /// Cursor options play no part here and options are never lifted. Options
    /// set on the request replace the payload options, missing options end up
    /// as an empty object.
    pub fn into_analysis_payload(self) -> QueryPayload {
        let mut payload = self.source.into_base_payload();

        if let Some(bind_vars) = self.bind_vars {
            payload.bind_vars = Some(bind_vars);
        }
        if let Some(options) = self.options {
            payload.options = options;
        }

        payload
    }
}
