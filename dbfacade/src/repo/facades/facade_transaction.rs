use super::FacadeError;
use crate::engine::TransactionEngineRef;
use crate::types::{TransactionCollections, TransactionInput, TransactionRequest};
use crate::utils::is_truthy;
use log::{debug, trace};
use serde_json::{Map, Value};

const LOCK_KINDS: [&str; 2] = ["read", "write"];

/// Facade handing transactions to the transaction engine.
///
/// The descriptor is normalized into plain JSON with every lock list turned
/// into a list of collection names. Locking, ordering and retries are up to the
/// engine.
pub struct FacadeTransaction {
    engine: TransactionEngineRef,
}

impl FacadeTransaction {
    pub fn new(engine: TransactionEngineRef) -> Self {
        Self { engine }
    }

    pub fn execute(&self, input: &TransactionInput) -> Result<Value, FacadeError> {
        let descriptor = Self::normalize(input);
        trace!("transaction descriptor: {}", descriptor);

        Ok(self.engine.execute(&descriptor)?)
    }

    /// Builds the descriptor sent to the engine, borrowing `input` only.
    pub fn normalize(input: &TransactionInput) -> Value {
        match input {
            TransactionInput::Request(request) => Value::Object(normalize_request(request)),
            TransactionInput::Raw(Value::Object(descriptor)) => {
                Value::Object(normalize_object(descriptor))
            }
            TransactionInput::Raw(other) => {
                debug!("transaction descriptor is not an object, passing it through");
                other.clone()
            }
        }
    }
}

fn normalize_request(request: &TransactionRequest) -> Map<String, Value> {
    let mut descriptor = request.options.clone();

    if let Some(collections) = &request.collections {
        descriptor.insert(
            "collections".to_owned(),
            Value::Object(normalize_collections(collections)),
        );
    }
    if !request.action.is_null() {
        descriptor.insert("action".to_owned(), request.action.clone());
    }
    if let Some(params) = &request.params {
        descriptor.insert("params".to_owned(), params.clone());
    }

    descriptor
}

fn normalize_collections(collections: &TransactionCollections) -> Map<String, Value> {
    let mut locks = collections.options.clone();

    for (kind, spec) in LOCK_KINDS
        .iter()
        .zip([&collections.read, &collections.write])
    {
        if let Some(spec) = spec {
            let names = spec.names().into_iter().map(Value::String).collect();
            locks.insert((*kind).to_owned(), Value::Array(names));
        }
    }

    locks
}

fn normalize_object(descriptor: &Map<String, Value>) -> Map<String, Value> {
    let mut descriptor = descriptor.clone();

    if let Some(Value::Object(collections)) = descriptor.get_mut("collections") {
        for kind in LOCK_KINDS {
            if let Some(locks) = collections.get_mut(kind).filter(|v| is_truthy(v))
                && !locks.is_array()
            {
                *locks = Value::Array(vec![locks.take()]);
            }
        }
    }

    descriptor
}
