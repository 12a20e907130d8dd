//! The database entry point.
//!
//! A [`Database`] owns references to the engines it delegates to and exposes
//! every facade operation on them. It holds no other state, so it can be cloned
//! and shared freely.

use crate::engine::{DirectoryRef, QueryEngineRef, TransactionEngineRef};
use crate::params;
use crate::query::{QueryPayload, QueryRequest, QuerySource, Statement};
use crate::repo::{FacadeCollection, FacadeError, FacadeIndex, FacadeQuery, FacadeTransaction};
use crate::types::{
    CollectionLocator, Cursor, DropOptions, IndexDescriptor, IndexLocator, LifecycleOutcome,
    TransactionInput,
};
use log::info;
use serde_json::Value;
use std::fmt;

#[derive(Clone)]
pub struct Database {
    name: String,
    directory: DirectoryRef,
    queries: QueryEngineRef,
    transactions: TransactionEngineRef,
}

impl Database {
    pub fn new(
        name: impl Into<String>,
        directory: DirectoryRef,
        queries: QueryEngineRef,
        transactions: TransactionEngineRef,
    ) -> Self {
        Self {
            name: name.into(),
            directory,
            queries,
            transactions,
        }
    }

    /// Database named after the configured default (see [`params::configurables`])
    pub fn with_default_name(
        directory: DirectoryRef,
        queries: QueryEngineRef,
        transactions: TransactionEngineRef,
    ) -> Self {
        Self::new(
            params::configurables().database.clone(),
            directory,
            queries,
            transactions,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_system(&self) -> bool {
        self.name == params::SYSTEM_DATABASE
    }

    // ------------------------------------------------------------------------
    // Indexes
    // ------------------------------------------------------------------------

    /// Looks up an index by handle, by `{id: ...}` object or by descriptor.
    /// `Ok(None)` means the collection exists but holds no such index.
    pub fn index(
        &self,
        locator: impl Into<IndexLocator>,
    ) -> Result<Option<IndexDescriptor>, FacadeError> {
        FacadeIndex::new(self.directory.clone()).resolve(&locator.into())
    }

    pub fn drop_index(&self, locator: impl Into<IndexLocator>) -> Result<bool, FacadeError> {
        let locator = locator.into();
        info!("[{}] dropping index `{}`", self.name, locator);
        FacadeIndex::new(self.directory.clone()).drop(&locator)
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    pub fn drop(
        &self,
        collection: impl Into<CollectionLocator>,
        options: &DropOptions,
    ) -> Result<LifecycleOutcome, FacadeError> {
        FacadeCollection::new(self.directory.clone()).drop(&collection.into(), options)
    }

    pub fn truncate(
        &self,
        collection: impl Into<CollectionLocator>,
    ) -> Result<LifecycleOutcome, FacadeError> {
        FacadeCollection::new(self.directory.clone()).truncate(&collection.into())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn create_statement(&self, payload: QueryPayload) -> Statement {
        self.query_facade().statement(payload)
    }

    pub fn query(&self, request: QueryRequest<'_>) -> Result<Cursor, FacadeError> {
        self.query_facade().query(request)
    }

    pub fn explain(&self, request: QueryRequest<'_>) -> Result<Value, FacadeError> {
        self.query_facade().explain(request)
    }

    pub fn profile_query(&self, request: QueryRequest<'_>) -> Result<Value, FacadeError> {
        self.query_facade().profile(request)
    }

    pub fn parse<'a>(&self, source: impl Into<QuerySource<'a>>) -> Result<Value, FacadeError> {
        self.query_facade().parse(source.into())
    }

    fn query_facade(&self) -> FacadeQuery {
        FacadeQuery::new(self.queries.clone())
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    pub fn execute_transaction(
        &self,
        input: impl Into<TransactionInput>,
    ) -> Result<Value, FacadeError> {
        FacadeTransaction::new(self.transactions.clone()).execute(&input.into())
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Database \"{}\"]", self.name)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").field("name", &self.name).finish()
    }
}
