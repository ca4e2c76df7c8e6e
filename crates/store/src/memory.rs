//! MemoryStore: in-process backend with one table per structure family
//!
//! This module implements the Backend trait using:
//! - `HashMap<String, String>` for string records
//! - `HashMap<String, HashSet<String>>` for membership sets
//! - `HashMap<String, HashMap<String, f64>>` for sorted sets
//! - `HashMap<String, i64>` for integer counters
//! - `HashMap<String, VecDeque<String>>` for lists
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **One lock per family**: every Backend call acquires exactly one
//!   lock once, so each call is atomic on its own. Nothing coordinates
//!   across calls, matching the service's documented consistency model.
//! - **Sorted-set ordering**: score descending, ties broken by member
//!   name ascending. The tie-break is deterministic here but the
//!   contract leaves it unspecified.
//! - **No capacity management**: sets and lists grow until trimmed or
//!   removed by callers; empty sets are kept (tag sets are never
//!   cleaned up once created).

use std::collections::{HashMap, HashSet, VecDeque};

use parking_lot::RwLock;

use cabinet_core::{Backend, Result};

/// In-process backend using per-family RwLock-guarded maps
///
/// Thread-safe through `parking_lot::RwLock`; safe to share behind an
/// `Arc` across any number of concurrent callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    strings: RwLock<HashMap<String, String>>,
    sets: RwLock<HashMap<String, HashSet<String>>>,
    zsets: RwLock<HashMap<String, HashMap<String, f64>>>,
    counters: RwLock<HashMap<String, i64>>,
    lists: RwLock<HashMap<String, VecDeque<String>>>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.strings
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.strings.read().get(key).cloned())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.strings.read().contains_key(key))
    }

    fn del(&self, key: &str) -> Result<bool> {
        Ok(self.strings.write().remove(key).is_some())
    }

    fn sadd(&self, set: &str, member: &str) -> Result<bool> {
        Ok(self
            .sets
            .write()
            .entry(set.to_string())
            .or_default()
            .insert(member.to_string()))
    }

    fn srem(&self, set: &str, member: &str) -> Result<bool> {
        // The set entry itself is kept even when it becomes empty.
        Ok(self
            .sets
            .write()
            .get_mut(set)
            .is_some_and(|members| members.remove(member)))
    }

    fn smembers(&self, set: &str) -> Result<Vec<String>> {
        Ok(self
            .sets
            .read()
            .get(set)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn scard(&self, set: &str) -> Result<u64> {
        Ok(self.sets.read().get(set).map_or(0, |m| m.len() as u64))
    }

    fn set_names(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .sets
            .read()
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn zincr(&self, zset: &str, member: &str, delta: f64) -> Result<f64> {
        let mut zsets = self.zsets.write();
        let score = zsets
            .entry(zset.to_string())
            .or_default()
            .entry(member.to_string())
            .or_insert(0.0);
        *score += delta;
        Ok(*score)
    }

    fn ztop(&self, zset: &str, n: usize) -> Result<Vec<(String, f64)>> {
        let zsets = self.zsets.read();
        let Some(scores) = zsets.get(zset) else {
            return Ok(Vec::new());
        };
        let mut ranked: Vec<(String, f64)> = scores
            .iter()
            .map(|(member, score)| (member.clone(), *score))
            .collect();
        // Score descending, member name ascending among equal scores.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        Ok(ranked)
    }

    fn incr(&self, key: &str) -> Result<i64> {
        let mut counters = self.counters.write();
        let total = counters.entry(key.to_string()).or_insert(0);
        *total += 1;
        Ok(*total)
    }

    fn lpush(&self, list: &str, value: &str) -> Result<()> {
        self.lists
            .write()
            .entry(list.to_string())
            .or_default()
            .push_front(value.to_string());
        Ok(())
    }

    fn ltrim(&self, list: &str, start: usize, stop: usize) -> Result<()> {
        let mut lists = self.lists.write();
        if let Some(entries) = lists.get_mut(list) {
            let kept: VecDeque<String> = entries
                .iter()
                .skip(start)
                .take(stop.saturating_sub(start) + 1)
                .cloned()
                .collect();
            *entries = kept;
        }
        Ok(())
    }

    fn lrange(&self, list: &str, start: usize, stop: usize) -> Result<Vec<String>> {
        Ok(self
            .lists
            .read()
            .get(list)
            .map(|entries| {
                entries
                    .iter()
                    .skip(start)
                    .take(stop.saturating_sub(start) + 1)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> MemoryStore {
        MemoryStore::new()
    }

    #[test]
    fn test_set_and_get() {
        let store = setup();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_get_missing() {
        let store = setup();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = setup();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_del_reports_presence() {
        let store = setup();
        store.set("k", "v").unwrap();
        assert!(store.del("k").unwrap());
        assert!(!store.del("k").unwrap());
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_sadd_idempotent() {
        let store = setup();
        assert!(store.sadd("s", "a").unwrap());
        assert!(!store.sadd("s", "a").unwrap());
        assert_eq!(store.scard("s").unwrap(), 1);
    }

    #[test]
    fn test_srem_absent_member() {
        let store = setup();
        assert!(!store.srem("s", "a").unwrap());
        store.sadd("s", "a").unwrap();
        assert!(store.srem("s", "a").unwrap());
        assert!(!store.srem("s", "a").unwrap());
    }

    #[test]
    fn test_smembers_unknown_set_is_empty() {
        let store = setup();
        assert!(store.smembers("unknown").unwrap().is_empty());
    }

    #[test]
    fn test_empty_set_survives_removal() {
        let store = setup();
        store.sadd("s", "a").unwrap();
        store.srem("s", "a").unwrap();
        assert_eq!(store.scard("s").unwrap(), 0);
        assert_eq!(store.set_names("s").unwrap(), vec!["s".to_string()]);
    }

    #[test]
    fn test_set_names_prefix_filter() {
        let store = setup();
        store.sadd("tag:fruit", "x").unwrap();
        store.sadd("tag:red", "x").unwrap();
        store.sadd("items", "x").unwrap();

        let mut names = store.set_names("tag:").unwrap();
        names.sort();
        assert_eq!(names, vec!["tag:fruit".to_string(), "tag:red".to_string()]);
    }

    #[test]
    fn test_zincr_accumulates() {
        let store = setup();
        assert_eq!(store.zincr("z", "a", 1.0).unwrap(), 1.0);
        assert_eq!(store.zincr("z", "a", 1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_ztop_orders_by_score_desc() {
        let store = setup();
        for _ in 0..5 {
            store.zincr("z", "mid", 1.0).unwrap();
        }
        for _ in 0..8 {
            store.zincr("z", "high", 1.0).unwrap();
        }
        for _ in 0..3 {
            store.zincr("z", "low", 1.0).unwrap();
        }

        let ranked = store.ztop("z", 10).unwrap();
        assert_eq!(
            ranked,
            vec![
                ("high".to_string(), 8.0),
                ("mid".to_string(), 5.0),
                ("low".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn test_ztop_truncates_to_n() {
        let store = setup();
        for i in 0..10 {
            store.zincr("z", &format!("m{i}"), (i + 1) as f64).unwrap();
        }
        assert_eq!(store.ztop("z", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_ztop_unknown_zset_is_empty() {
        let store = setup();
        assert!(store.ztop("unknown", 5).unwrap().is_empty());
    }

    #[test]
    fn test_incr_starts_at_one() {
        let store = setup();
        assert_eq!(store.incr("c").unwrap(), 1);
        assert_eq!(store.incr("c").unwrap(), 2);
        assert_eq!(store.incr("c").unwrap(), 3);
    }

    #[test]
    fn test_counters_independent_of_strings() {
        let store = setup();
        store.set("k", "v").unwrap();
        assert_eq!(store.incr("k").unwrap(), 1);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_lpush_prepends() {
        let store = setup();
        store.lpush("l", "first").unwrap();
        store.lpush("l", "second").unwrap();
        assert_eq!(
            store.lrange("l", 0, 9).unwrap(),
            vec!["second".to_string(), "first".to_string()]
        );
    }

    #[test]
    fn test_ltrim_keeps_inclusive_range() {
        let store = setup();
        for i in 0..15 {
            store.lpush("l", &format!("e{i}")).unwrap();
        }
        store.ltrim("l", 0, 9).unwrap();
        let entries = store.lrange("l", 0, 99).unwrap();
        assert_eq!(entries.len(), 10);
        // Newest entry survives at the front.
        assert_eq!(entries[0], "e14");
    }

    #[test]
    fn test_lrange_unknown_list_is_empty() {
        let store = setup();
        assert!(store.lrange("unknown", 0, 9).unwrap().is_empty());
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryStore>();
    }
}
