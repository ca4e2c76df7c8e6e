//! TagIndex: per-tag sets of item keys
//!
//! ## Design
//!
//! Tags are stored denormalized as reverse-index sets named
//! `tag:{name}`, one set per tag, each holding the member item keys.
//! There is no "which tags does this item belong to" index, so removing
//! an item from all tags enumerates every tag set ever created. That
//! scan is linear in the number of distinct tags and is a deliberate
//! simplification.
//!
//! Tag sets are never cleaned up once they become empty.

use std::sync::Arc;

use cabinet_core::{Backend, Result};

const TAG_PREFIX: &str = "tag:";

/// Per-tag membership sets
#[derive(Clone)]
pub struct TagIndex {
    backend: Arc<dyn Backend>,
}

impl TagIndex {
    /// Create a new TagIndex over a shared backend handle
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    fn set_for(&self, tag: &str) -> String {
        format!("{TAG_PREFIX}{tag}")
    }

    /// Split a comma-delimited tag string into trimmed tag names
    ///
    /// Empty segments are dropped; an empty or absent input yields no
    /// tags, which callers treat as a no-op rather than an error.
    /// Duplicates are not collapsed here; set membership makes the
    /// subsequent adds idempotent anyway.
    pub fn parse(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Insert an item key into a tag's set (idempotent)
    pub fn add_member(&self, tag: &str, key: &str) -> Result<()> {
        self.backend.sadd(&self.set_for(tag), key)?;
        Ok(())
    }

    /// All item keys carrying a tag; empty if the tag is unknown
    pub fn members_of(&self, tag: &str) -> Result<Vec<String>> {
        self.backend.smembers(&self.set_for(tag))
    }

    /// Remove an item key from every tag set
    ///
    /// Enumerates all tag sets and removes the key from each. Called on
    /// item deletion; the most expensive operation in the indexing
    /// scheme.
    pub fn remove_from_all_tags(&self, key: &str) -> Result<()> {
        for set in self.backend.set_names(TAG_PREFIX)? {
            self.backend.srem(&set, key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_store::MemoryStore;

    fn setup() -> TagIndex {
        TagIndex::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_parse_splits_and_trims() {
        assert_eq!(TagIndex::parse("fruit, red"), vec!["fruit", "red"]);
        assert_eq!(TagIndex::parse("  a  ,b,  c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        assert!(TagIndex::parse("").is_empty());
        assert!(TagIndex::parse("  ,  ,").is_empty());
        assert_eq!(TagIndex::parse("a,,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_tags_collapse_in_set() {
        let tags = setup();
        for tag in TagIndex::parse("a, b , a") {
            tags.add_member(&tag, "x").unwrap();
        }
        assert_eq!(tags.members_of("a").unwrap(), vec!["x".to_string()]);
        assert_eq!(tags.members_of("b").unwrap(), vec!["x".to_string()]);
    }

    #[test]
    fn test_members_of_unknown_tag_is_empty() {
        let tags = setup();
        assert!(tags.members_of("unknown").unwrap().is_empty());
    }

    #[test]
    fn test_remove_from_all_tags() {
        let tags = setup();
        tags.add_member("fruit", "x").unwrap();
        tags.add_member("red", "x").unwrap();
        tags.add_member("fruit", "y").unwrap();

        tags.remove_from_all_tags("x").unwrap();

        assert!(tags.members_of("red").unwrap().is_empty());
        assert_eq!(tags.members_of("fruit").unwrap(), vec!["y".to_string()]);
    }

    #[test]
    fn test_empty_tag_set_is_kept() {
        let tags = setup();
        tags.add_member("fruit", "x").unwrap();
        tags.remove_from_all_tags("x").unwrap();

        // The set survives empty; a later add reuses it.
        assert!(tags.members_of("fruit").unwrap().is_empty());
        tags.add_member("fruit", "y").unwrap();
        assert_eq!(tags.members_of("fruit").unwrap(), vec!["y".to_string()]);
    }

    #[test]
    fn test_tag_sets_do_not_collide_with_records() {
        let backend = Arc::new(MemoryStore::new());
        let tags = TagIndex::new(backend.clone());
        tags.add_member("fruit", "x").unwrap();

        use cabinet_core::Backend as _;
        assert_eq!(backend.smembers("tag:fruit").unwrap(), vec!["x".to_string()]);
        assert!(backend.smembers("fruit").unwrap().is_empty());
    }
}
