//! Metrics: view ranking and like counters
//!
//! ## Design
//!
//! Views live in one sorted set (`views`, score = view count per item
//! key). Likes live in plain integer counters under `likes:{key}`, a
//! namespace independent of both the view ranking and the records.
//!
//! A deleted item's entry in the view ranking is never pruned; stale
//! keys may appear in the leaderboard. That is accepted behavior, not
//! corrected here.

use std::sync::Arc;

use cabinet_core::{Backend, Result};

const VIEWS_ZSET: &str = "views";
const LIKES_PREFIX: &str = "likes:";

/// View ranking and per-item like counters
#[derive(Clone)]
pub struct Metrics {
    backend: Arc<dyn Backend>,
}

impl Metrics {
    /// Create a new Metrics store over a shared backend handle
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Increment an item's view score by one
    ///
    /// Called only after a successful read of an existing item.
    pub fn record_view(&self, key: &str) -> Result<()> {
        self.backend.zincr(VIEWS_ZSET, key, 1.0)?;
        Ok(())
    }

    /// Up to `n` (key, views) pairs ordered by view count descending
    ///
    /// Tie order among equal counts is stable but unspecified.
    pub fn top_viewed(&self, n: usize) -> Result<Vec<(String, u64)>> {
        Ok(self
            .backend
            .ztop(VIEWS_ZSET, n)?
            .into_iter()
            .map(|(key, score)| (key, score as u64))
            .collect())
    }

    /// Increment an item's like counter, returning the new total
    ///
    /// Works whether or not the item exists as a record.
    pub fn like(&self, key: &str) -> Result<i64> {
        self.backend.incr(&format!("{LIKES_PREFIX}{key}"))
    }
}
