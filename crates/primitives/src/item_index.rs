//! ItemIndex: membership set of all live item keys
//!
//! Avoids a full key-space scan for "list all items" and "count items",
//! at the cost of being kept manually in sync with the record store on
//! every create and delete. The index and the records can disagree in
//! the window between the two writes of a create/delete; that window is
//! part of the contract.

use std::sync::Arc;

use cabinet_core::{Backend, Result};

const INDEX_SET: &str = "items";

/// Membership set of all live item keys
#[derive(Clone)]
pub struct ItemIndex {
    backend: Arc<dyn Backend>,
}

impl ItemIndex {
    /// Create a new ItemIndex over a shared backend handle
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Insert a key into the index (idempotent)
    pub fn add(&self, key: &str) -> Result<()> {
        self.backend.sadd(INDEX_SET, key)?;
        Ok(())
    }

    /// Remove a key from the index (idempotent, no error if absent)
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.srem(INDEX_SET, key)?;
        Ok(())
    }

    /// All keys currently in the index
    pub fn all(&self) -> Result<Vec<String>> {
        self.backend.smembers(INDEX_SET)
    }

    /// Cardinality of the index, without materializing the members
    pub fn count(&self) -> Result<u64> {
        self.backend.scard(INDEX_SET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_store::MemoryStore;

    fn setup() -> ItemIndex {
        ItemIndex::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_and_all() {
        let index = setup();
        index.add("a").unwrap();
        index.add("b").unwrap();

        let mut keys = index.all().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let index = setup();
        index.add("a").unwrap();
        index.add("a").unwrap();
        assert_eq!(index.count().unwrap(), 1);
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let index = setup();
        index.remove("never-added").unwrap();
        assert_eq!(index.count().unwrap(), 0);
    }

    #[test]
    fn test_count_tracks_membership() {
        let index = setup();
        assert_eq!(index.count().unwrap(), 0);
        index.add("a").unwrap();
        index.add("b").unwrap();
        assert_eq!(index.count().unwrap(), 2);
        index.remove("a").unwrap();
        assert_eq!(index.count().unwrap(), 1);
    }
}
