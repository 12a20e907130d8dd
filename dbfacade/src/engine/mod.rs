//! # Engine Collaborators
//!
//! Interfaces of the systems this crate delegates to. The facade only shapes
//! requests and resolves handles; storage, query execution and transactions are
//! owned by implementors of these traits.
//!
//! All collaborators are shared as `Arc<dyn ...>` references (see [`CollectionRef`],
//! [`DirectoryRef`], [`QueryEngineRef`], [`TransactionEngineRef`]).

mod error;
pub use error::*;

use crate::query::QueryPayload;
use crate::types::{Cursor, DropOptions, IndexDescriptor};
use serde_json::Value;
use std::sync::Arc;

pub type CollectionRef = Arc<dyn Collection>;
pub type DirectoryRef = Arc<dyn CollectionDirectory>;
pub type QueryEngineRef = Arc<dyn QueryEngine>;
pub type TransactionEngineRef = Arc<dyn TransactionEngine>;

/// A live collection held by the storage engine.
pub trait Collection: Send + Sync {
    fn name(&self) -> &str;

    /// Current index list, in engine order
    fn indexes(&self) -> Result<Vec<IndexDescriptor>, Error>;

    /// Drops the index addressed by `handle`, returns `false` if no such index existed
    fn drop_index(&self, handle: &str) -> Result<bool, Error>;

    /// Drops the collection itself
    fn drop_collection(&self, options: &DropOptions) -> Result<(), Error>;

    fn truncate(&self) -> Result<(), Error>;
}

/// Name based lookup of live collections.
pub trait CollectionDirectory: Send + Sync {
    /// Looks up a collection by its exact (case-sensitive) name.
    fn collection(&self, name: &str) -> Result<Option<CollectionRef>, Error>;
}

/// Capability of objects able to render themselves as query text.
pub trait AqlBuilder {
    fn to_aql(&self) -> String;
}

/// Query execution, explanation and parsing.
pub trait QueryEngine: Send + Sync {
    fn execute(&self, payload: &QueryPayload) -> Result<Cursor, Error>;

    fn explain(&self, payload: &QueryPayload) -> Result<Value, Error>;

    /// Runs the query with profiling as requested by `payload.options.profile`
    fn profile(&self, payload: &QueryPayload) -> Result<Value, Error>;

    /// Parses query text without executing it. Non-string input is the engine's
    /// to reject.
    fn parse(&self, query: &Value) -> Result<Value, Error>;
}

/// Executes a transaction body under the collection locks of its descriptor.
pub trait TransactionEngine: Send + Sync {
    fn execute(&self, descriptor: &Value) -> Result<Value, Error>;
}
