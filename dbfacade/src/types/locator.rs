use crate::engine::CollectionRef;
use crate::types::IndexDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a caller designates a collection: by name, or with a handle it already holds.
#[derive(Clone)]
pub enum CollectionLocator {
    Name(String),
    Handle(CollectionRef),
}

impl CollectionLocator {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Handle(col) => col.name(),
        }
    }
}

impl fmt::Debug for CollectionLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Handle(col) => f.debug_tuple("Handle").field(&col.name()).finish(),
        }
    }
}

impl fmt::Display for CollectionLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for CollectionLocator {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for CollectionLocator {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<CollectionRef> for CollectionLocator {
    fn from(col: CollectionRef) -> Self {
        Self::Handle(col)
    }
}

impl From<&CollectionRef> for CollectionLocator {
    fn from(col: &CollectionRef) -> Self {
        Self::Handle(col.clone())
    }
}

/// How a caller designates an index: a raw handle string, or any object
/// carrying the handle in its `id` field.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexLocator {
    Handle(String),
    Object(Value),
}

impl IndexLocator {
    /// The handle string this locator designates, if it designates one.
    pub fn handle(&self) -> Option<&str> {
        match self {
            Self::Handle(h) => Some(h.as_str()),
            Self::Object(Value::String(h)) => Some(h.as_str()),
            Self::Object(Value::Object(obj)) => obj.get("id").and_then(Value::as_str),
            Self::Object(_) => None,
        }
    }
}

impl fmt::Display for IndexLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle(h) => f.write_str(h),
            Self::Object(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for IndexLocator {
    fn from(handle: &str) -> Self {
        Self::Handle(handle.to_owned())
    }
}

impl From<String> for IndexLocator {
    fn from(handle: String) -> Self {
        Self::Handle(handle)
    }
}

impl From<&IndexDescriptor> for IndexLocator {
    fn from(index: &IndexDescriptor) -> Self {
        Self::Handle(index.id.clone())
    }
}

impl From<Value> for IndexLocator {
    fn from(value: Value) -> Self {
        Self::Object(value)
    }
}

/// Options forwarded untouched to a collection drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOptions {
    /// Required to drop system collections
    #[serde(default)]
    pub is_system: bool,
}

impl DropOptions {
    pub fn system() -> Self {
        Self { is_system: true }
    }
}

/// Result of an idempotent lifecycle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The collection existed and the operation was applied to it
    Applied,
    /// There was no collection to operate on, nothing happened
    Absent,
}

impl LifecycleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
