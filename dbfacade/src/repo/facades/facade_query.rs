use super::FacadeError;
use crate::engine::QueryEngineRef;
use crate::params;
use crate::query::{QueryPayload, QueryRequest, QuerySource, Statement};
use crate::types::Cursor;
use log::{debug, info, trace};
use serde_json::Value;

/// Facade used to run queries: every request is normalized into a
/// [`QueryPayload`] here before it reaches the query engine.
pub struct FacadeQuery {
    engine: QueryEngineRef,
}

impl FacadeQuery {
    pub fn new(engine: QueryEngineRef) -> Self {
        Self { engine }
    }

    pub fn statement(&self, payload: QueryPayload) -> Statement {
        Statement::new(self.engine.clone(), payload)
    }

    pub fn query(&self, request: QueryRequest<'_>) -> Result<Cursor, FacadeError> {
        let payload = request.into_payload();
        debug!("performing a query");
        trace!("query payload: {:?}", payload);

        let cursor = self.statement(payload).execute()?;

        if cursor.has_warnings() {
            info!("query returned {} warnings", cursor.warnings.len());
        }
        Ok(cursor)
    }

    pub fn explain(&self, request: QueryRequest<'_>) -> Result<Value, FacadeError> {
        let payload = request.into_analysis_payload();
        trace!("explain payload: {:?}", payload);

        Ok(self.engine.explain(&payload)?)
    }

    /// Runs the query with profiling forced on. The profiling level is set on
    /// the payload's own options, which never alias the caller's.
    pub fn profile(&self, request: QueryRequest<'_>) -> Result<Value, FacadeError> {
        let mut payload = request.into_analysis_payload();
        payload
            .options
            .insert("profile".to_owned(), params::PROFILE_LEVEL.into());
        trace!("profile payload: {:?}", payload);

        Ok(self.engine.profile(&payload)?)
    }

    /// Parses a query without running it, builders are rendered first.
    pub fn parse(&self, source: QuerySource<'_>) -> Result<Value, FacadeError> {
        let text = source.into_text();
        trace!("parsing query {}", text);

        Ok(self.engine.parse(&text)?)
    }
}
