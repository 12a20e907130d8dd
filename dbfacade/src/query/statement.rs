use super::QueryPayload;
use crate::engine::{self, QueryEngineRef};
use crate::types::Cursor;
use log::trace;
use serde_json::{Map, Value};

/// A query payload bound to the engine that will run it.
///
/// The payload can still be adjusted before [`Statement::execute`] is called.
pub struct Statement {
    engine: QueryEngineRef,
    payload: QueryPayload,
}

impl Statement {
    pub fn new(engine: QueryEngineRef, payload: QueryPayload) -> Self {
        Self { engine, payload }
    }

    pub fn payload(&self) -> &QueryPayload {
        &self.payload
    }

    pub fn into_payload(self) -> QueryPayload {
        self.payload
    }

    /// Sets a bind variable, turning the bind variables into an object if needed
    pub fn bind(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let vars = self
            .payload
            .bind_vars
            .get_or_insert_with(|| Value::Object(Map::new()));
        if !vars.is_object() {
            *vars = Value::Object(Map::new());
        }
        if let Value::Object(vars) = vars {
            vars.insert(name.to_owned(), value.into());
        }
        self
    }

    pub fn set_count(&mut self, count: bool) -> &mut Self {
        self.payload.count = count;
        self
    }

    pub fn set_batch_size(&mut self, batch_size: u64) -> &mut Self {
        self.payload.batch_size = Some(batch_size.into());
        self
    }

    pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.payload.options.insert(key.to_owned(), value.into());
        self
    }

    pub fn execute(&self) -> Result<Cursor, engine::Error> {
        trace!("executing statement: {:?}", self.payload.query);
        self.engine.execute(&self.payload)
    }

    pub fn explain(&self) -> Result<Value, engine::Error> {
        trace!("explaining statement: {:?}", self.payload.query);
        self.engine.explain(&self.payload)
    }
}
