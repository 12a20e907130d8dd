//! In-memory collaborators for unit tests.

use crate::engine::{self, Collection, CollectionDirectory, CollectionRef, QueryEngine, TransactionEngine};
use crate::query::QueryPayload;
use crate::types::{Cursor, DropOptions, IndexDescriptor};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One-shot failure injected into the next fallible call
#[derive(Default)]
struct FailNext(Mutex<Option<engine::Error>>);

impl FailNext {
    fn set(&self, err: engine::Error) {
        *self.0.lock().unwrap() = Some(err);
    }

    fn check(&self) -> Result<(), engine::Error> {
        match self.0.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub struct MemoryCollection {
    name: String,
    indexes: Mutex<Vec<IndexDescriptor>>,
    dropped: AtomicBool,
    truncations: AtomicUsize,
    last_drop: Mutex<Option<DropOptions>>,
    fail_next: FailNext,
}

impl MemoryCollection {
    fn new(name: &str, indexes: Vec<IndexDescriptor>) -> Self {
        Self {
            name: name.to_owned(),
            indexes: Mutex::new(indexes),
            dropped: AtomicBool::new(false),
            truncations: AtomicUsize::new(0),
            last_drop: Mutex::new(None),
            fail_next: FailNext::default(),
        }
    }

    pub fn add_index(&self, index: IndexDescriptor) {
        self.indexes.lock().unwrap().push(index);
    }

    pub fn index_count(&self) -> usize {
        self.indexes.lock().unwrap().len()
    }

    pub fn fail_next_with(&self, err: engine::Error) {
        self.fail_next.set(err);
    }

    pub fn is_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }

    pub fn truncations(&self) -> usize {
        self.truncations.load(Ordering::SeqCst)
    }

    pub fn last_drop_options(&self) -> Option<DropOptions> {
        self.last_drop.lock().unwrap().clone()
    }

    fn ensure_alive(&self) -> Result<(), engine::Error> {
        if self.is_dropped() {
            return Err(engine::Error::DataSourceNotFound(self.name.clone()));
        }
        Ok(())
    }
}

impl Collection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn indexes(&self) -> Result<Vec<IndexDescriptor>, engine::Error> {
        self.fail_next.check()?;
        self.ensure_alive()?;
        Ok(self.indexes.lock().unwrap().clone())
    }

    fn drop_index(&self, handle: &str) -> Result<bool, engine::Error> {
        self.fail_next.check()?;
        self.ensure_alive()?;

        let mut indexes = self.indexes.lock().unwrap();
        let by_name = |idx: &IndexDescriptor| format!("{}/{}", self.name, idx.name) == handle;
        match indexes.iter().position(|idx| idx.id == handle || by_name(idx)) {
            Some(pos) => {
                indexes.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn drop_collection(&self, options: &DropOptions) -> Result<(), engine::Error> {
        self.fail_next.check()?;
        if self.dropped.swap(true, Ordering::SeqCst) {
            return Err(engine::Error::DataSourceNotFound(self.name.clone()));
        }
        *self.last_drop.lock().unwrap() = Some(options.clone());
        Ok(())
    }

    fn truncate(&self) -> Result<(), engine::Error> {
        self.fail_next.check()?;
        self.ensure_alive()?;
        self.truncations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDirectory {
    collections: Mutex<HashMap<String, Arc<MemoryCollection>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, name: &str, indexes: Vec<IndexDescriptor>) -> Arc<MemoryCollection> {
        let col = Arc::new(MemoryCollection::new(name, indexes));
        self.collections
            .lock()
            .unwrap()
            .insert(name.to_owned(), col.clone());
        col
    }

    /// Live collection named `name`
    pub fn get(&self, name: &str) -> Option<Arc<MemoryCollection>> {
        self.get_dropped(name).filter(|c| !c.is_dropped())
    }

    /// Collection named `name`, dropped or not
    pub fn get_dropped(&self, name: &str) -> Option<Arc<MemoryCollection>> {
        self.collections.lock().unwrap().get(name).cloned()
    }
}

impl CollectionDirectory for MemoryDirectory {
    fn collection(&self, name: &str) -> Result<Option<CollectionRef>, engine::Error> {
        Ok(self.get(name).map(|c| c as CollectionRef))
    }
}

#[derive(Default)]
pub struct RecordingQueryEngine {
    executed: Mutex<Vec<QueryPayload>>,
    explained: Mutex<Vec<QueryPayload>>,
    profiled: Mutex<Vec<QueryPayload>>,
    parsed: Mutex<Vec<Value>>,
    fail_next: FailNext,
}

impl RecordingQueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_with(&self, err: engine::Error) {
        self.fail_next.set(err);
    }

    pub fn last_executed(&self) -> Option<QueryPayload> {
        self.executed.lock().unwrap().last().cloned()
    }

    pub fn last_explained(&self) -> Option<QueryPayload> {
        self.explained.lock().unwrap().last().cloned()
    }

    pub fn last_profiled(&self) -> Option<QueryPayload> {
        self.profiled.lock().unwrap().last().cloned()
    }

    pub fn parsed(&self) -> Vec<Value> {
        self.parsed.lock().unwrap().clone()
    }
}

impl QueryEngine for RecordingQueryEngine {
    fn execute(&self, payload: &QueryPayload) -> Result<Cursor, engine::Error> {
        self.executed.lock().unwrap().push(payload.clone());
        self.fail_next.check()?;

        let cursor = Cursor::new(Vec::new());
        Ok(if payload.count {
            cursor.with_count(0)
        } else {
            cursor
        })
    }

    fn explain(&self, payload: &QueryPayload) -> Result<Value, engine::Error> {
        self.explained.lock().unwrap().push(payload.clone());
        self.fail_next.check()?;
        Ok(json!({"plan": {"nodes": []}, "cacheable": true}))
    }

    fn profile(&self, payload: &QueryPayload) -> Result<Value, engine::Error> {
        self.profiled.lock().unwrap().push(payload.clone());
        self.fail_next.check()?;
        Ok(json!({"profile": {"executing": 0.0}}))
    }

    fn parse(&self, query: &Value) -> Result<Value, engine::Error> {
        self.parsed.lock().unwrap().push(query.clone());
        self.fail_next.check()?;
        Ok(json!({"parsed": true, "collections": [], "bindVars": []}))
    }
}

/// Transaction engine echoing back the descriptor it receives
#[derive(Default)]
pub struct RecordingTransactionEngine {
    executed: Mutex<Vec<Value>>,
    fail_next: FailNext,
}

impl RecordingTransactionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_with(&self, err: engine::Error) {
        self.fail_next.set(err);
    }

    pub fn executed(&self) -> Vec<Value> {
        self.executed.lock().unwrap().clone()
    }
}

impl TransactionEngine for RecordingTransactionEngine {
    fn execute(&self, descriptor: &Value) -> Result<Value, engine::Error> {
        self.executed.lock().unwrap().push(descriptor.clone());
        self.fail_next.check()?;
        Ok(descriptor.clone())
    }
}
