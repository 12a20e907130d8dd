use crate::engine::CollectionRef;
use crate::types::CollectionLocator;
use serde_json::{Map, Value};

/// Collections locked by a transaction, as supplied by the caller: a single
/// collection or a list.
#[derive(Debug, Clone)]
pub enum LockSpec {
    One(CollectionLocator),
    Many(Vec<CollectionLocator>),
}

impl LockSpec {
    /// Collection names locked by this spec, in the order given
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::One(col) => vec![col.name().to_owned()],
            Self::Many(cols) => cols.iter().map(|c| c.name().to_owned()).collect(),
        }
    }
}

impl From<CollectionLocator> for LockSpec {
    fn from(col: CollectionLocator) -> Self {
        Self::One(col)
    }
}

impl From<&str> for LockSpec {
    fn from(name: &str) -> Self {
        Self::One(name.into())
    }
}

impl From<String> for LockSpec {
    fn from(name: String) -> Self {
        Self::One(name.into())
    }
}

impl From<CollectionRef> for LockSpec {
    fn from(col: CollectionRef) -> Self {
        Self::One(col.into())
    }
}

impl<T: Into<CollectionLocator>> From<Vec<T>> for LockSpec {
    fn from(cols: Vec<T>) -> Self {
        cols.into_iter().collect()
    }
}

impl<T: Into<CollectionLocator>> FromIterator<T> for LockSpec {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionCollections {
    pub read: Option<LockSpec>,
    pub write: Option<LockSpec>,
    /// Remaining lock options (`exclusive`, `allowImplicit`, ...)
    pub options: Map<String, Value>,
}

impl TransactionCollections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(mut self, spec: impl Into<LockSpec>) -> Self {
        self.read = Some(spec.into());
        self
    }

    pub fn write(mut self, spec: impl Into<LockSpec>) -> Self {
        self.write = Some(spec.into());
        self
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_owned(), value.into());
        self
    }
}

/// A typed transaction descriptor, may reference collections by handle.
#[derive(Debug, Clone, Default)]
pub struct TransactionRequest {
    pub collections: Option<TransactionCollections>,
    pub action: Value,
    pub params: Option<Value>,
    /// Remaining engine options (`waitForSync`, `lockTimeout`, ...)
    pub options: Map<String, Value>,
}

impl TransactionRequest {
    pub fn new(action: impl Into<Value>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn collections(mut self, collections: TransactionCollections) -> Self {
        self.collections = Some(collections);
        self
    }

    pub fn params(mut self, params: impl Into<Value>) -> Self {
        self.params = Some(params.into());
        self
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_owned(), value.into());
        self
    }
}

/// Anything accepted as a transaction descriptor.
#[derive(Debug, Clone)]
pub enum TransactionInput {
    Request(TransactionRequest),
    /// A descriptor as plain JSON; non-objects are handed to the engine as they are
    Raw(Value),
}

impl From<TransactionRequest> for TransactionInput {
    fn from(request: TransactionRequest) -> Self {
        Self::Request(request)
    }
}

impl From<Value> for TransactionInput {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}
