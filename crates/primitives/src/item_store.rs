//! ItemStore: the item store facade
//!
//! Composes the five index maintainers over one shared backend handle
//! and owns the fixed step sequence of every operation. The backend
//! handle is a constructed client object passed in at startup, not a
//! process-wide singleton.
//!
//! ## Sequencing
//!
//! Every mutating operation writes the primary record first, then the
//! secondary indexes, then the activity log. There is no cross-step
//! atomicity and no rollback. Failures in the auxiliary writes (tag
//! membership, view score, activity log) after the primary effect
//! landed are logged and swallowed; the operation still reports success
//! for the primary effect it already performed. That asymmetry is the
//! contract.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use cabinet_core::{Backend, Error, Result};

use crate::{ActivityLog, ItemIndex, Metrics, RecordStore, TagIndex};

/// Number of entries the leaderboard reports
pub const LEADERBOARD_SIZE: usize = 5;

/// Item store facade over a shared backend
#[derive(Clone)]
pub struct ItemStore {
    records: RecordStore,
    index: ItemIndex,
    tags: TagIndex,
    metrics: Metrics,
    log: ActivityLog,
}

impl ItemStore {
    /// Create an ItemStore with all maintainers sharing one backend
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            records: RecordStore::new(backend.clone()),
            index: ItemIndex::new(backend.clone()),
            tags: TagIndex::new(backend.clone()),
            metrics: Metrics::new(backend.clone()),
            log: ActivityLog::new(backend),
        }
    }

    /// Create an item: record, index membership, tag sets, log entry
    ///
    /// `tags` is an optional comma-delimited tag string; empty or absent
    /// means no tags, a no-op.
    pub fn create(&self, key: &str, value: &str, tags: Option<&str>) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return Err(Error::Validation(
                "Key e Value são obrigatórios.".to_string(),
            ));
        }
        self.records.put(key, value)?;
        self.index.add(key)?;
        self.apply_tags(key, tags);
        self.log_action(&format!("Item criado - Chave: {key}"));
        Ok(())
    }

    /// Fetch an item's value, recording a view on a hit
    pub fn fetch(&self, key: &str) -> Result<Option<String>> {
        let Some(value) = self.records.get(key)? else {
            return Ok(None);
        };
        // A failed view increment does not fail the read.
        if let Err(err) = self.metrics.record_view(key) {
            warn!(key, error = %err, "view increment failed");
        }
        Ok(Some(value))
    }

    /// All items as a key -> value map
    ///
    /// Enumerates the item index, then fetches each record. A key whose
    /// record vanished between the two steps is skipped.
    pub fn list_all(&self) -> Result<BTreeMap<String, String>> {
        let mut items = BTreeMap::new();
        for key in self.index.all()? {
            if let Some(value) = self.records.get(&key)? {
                items.insert(key, value);
            }
        }
        Ok(items)
    }

    /// Update an existing item's value; `false` if the key is absent
    pub fn update(&self, key: &str, value: &str, tags: Option<&str>) -> Result<bool> {
        if value.is_empty() {
            return Err(Error::Validation(
                "Value é obrigatório para atualização.".to_string(),
            ));
        }
        if !self.records.exists(key)? {
            return Ok(false);
        }
        self.records.put(key, value)?;
        self.apply_tags(key, tags);
        self.log_action(&format!("Item atualizado - Chave: {key}"));
        Ok(true)
    }

    /// Delete an item: record, index membership, every tag set, log entry
    ///
    /// Returns `false` (and touches nothing else) if the key is absent.
    /// The item's view score is deliberately left in place.
    pub fn delete(&self, key: &str) -> Result<bool> {
        if !self.records.delete(key)? {
            return Ok(false);
        }
        self.index.remove(key)?;
        self.tags.remove_from_all_tags(key)?;
        self.log_action(&format!("Item deletado - Chave: {key}"));
        Ok(true)
    }

    /// Number of live items, from the item index
    pub fn count(&self) -> Result<u64> {
        self.index.count()
    }

    /// Up to `n` most recent activity entries, most-recent-first
    pub fn recent_activity(&self, n: usize) -> Result<Vec<String>> {
        self.log.recent(n)
    }

    /// Increment an item's like counter, returning the new total
    ///
    /// Succeeds whether or not the item still (or ever) exists.
    pub fn like(&self, key: &str) -> Result<i64> {
        self.metrics.like(key)
    }

    /// All items carrying a tag, as a key -> value map
    pub fn items_by_tag(&self, tag: &str) -> Result<BTreeMap<String, String>> {
        let mut items = BTreeMap::new();
        for key in self.tags.members_of(tag)? {
            if let Some(value) = self.records.get(&key)? {
                items.insert(key, value);
            }
        }
        Ok(items)
    }

    /// Up to `n` (key, views) pairs ordered by view count descending
    pub fn leaderboard(&self, n: usize) -> Result<Vec<(String, u64)>> {
        self.metrics.top_viewed(n)
    }

    /// Best-effort tag membership writes
    fn apply_tags(&self, key: &str, tags: Option<&str>) {
        let Some(input) = tags else { return };
        for tag in TagIndex::parse(input) {
            if let Err(err) = self.tags.add_member(&tag, key) {
                warn!(key, tag = %tag, error = %err, "tag index write failed");
            }
        }
    }

    /// Best-effort activity log append
    fn log_action(&self, action: &str) {
        if let Err(err) = self.log.record(action) {
            warn!(action, error = %err, "activity log append failed");
        }
    }
}
