//! RecordStore: primary key -> value records
//!
//! ## Design
//!
//! RecordStore is a stateless facade over the backend. It holds no
//! state beyond an `Arc<dyn Backend>` reference.
//!
//! ## Key Namespacing
//!
//! Records live under `item:{key}` so they can never collide with the
//! item index set, tag sets, or counters sharing the same backend
//! keyspace.

use std::sync::Arc;

use cabinet_core::{Backend, Result};

const RECORD_PREFIX: &str = "item:";

/// Primary record store
///
/// Stateless facade over the backend; all state lives in the backend.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn Backend>,
}

impl RecordStore {
    /// Create a new RecordStore over a shared backend handle
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    fn key_for(&self, key: &str) -> String {
        format!("{RECORD_PREFIX}{key}")
    }

    /// Store or overwrite a record unconditionally
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.backend.set(&self.key_for(key), value)
    }

    /// Fetch a record's value, or `None` if absent
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.backend.get(&self.key_for(key))
    }

    /// Whether a record exists
    pub fn exists(&self, key: &str) -> Result<bool> {
        self.backend.exists(&self.key_for(key))
    }

    /// Remove a record; `true` if one was actually removed
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.backend.del(&self.key_for(key))
    }
}
