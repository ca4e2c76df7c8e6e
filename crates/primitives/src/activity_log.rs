//! ActivityLog: fixed-length most-recent-first action log
//!
//! ## Design
//!
//! Entries are human-readable strings `"<timestamp>: <action>"`
//! prepended to one backend list and trimmed to the 10 most recent.
//! Older entries are silently discarded. Entries are immutable once
//! written.
//!
//! Appending is fire-and-forget bookkeeping: callers log a failure and
//! carry on, they never fail the triggering operation over it.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use cabinet_core::{Backend, Result};

const LOG_LIST: &str = "activity";

/// Maximum number of retained entries
pub const LOG_CAPACITY: usize = 10;

/// Fixed-length activity log
#[derive(Clone)]
pub struct ActivityLog {
    backend: Arc<dyn Backend>,
}

impl ActivityLog {
    /// Create a new ActivityLog over a shared backend handle
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Record an action, timestamped now
    pub fn record(&self, action: &str) -> Result<()> {
        self.record_at(action, Utc::now())
    }

    /// Record an action with an explicit timestamp
    ///
    /// Formats `"<RFC 3339 UTC timestamp>: <action>"`, prepends it, and
    /// trims the log to [`LOG_CAPACITY`] entries. The push and the trim
    /// are two separate backend calls; a log one entry over capacity
    /// between them is harmless.
    pub fn record_at(&self, action: &str, at: DateTime<Utc>) -> Result<()> {
        let stamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.backend.lpush(LOG_LIST, &format!("{stamp}: {action}"))?;
        self.backend.ltrim(LOG_LIST, 0, LOG_CAPACITY - 1)?;
        Ok(())
    }

    /// Up to `n` most recent entries, most-recent-first
    pub fn recent(&self, n: usize) -> Result<Vec<String>> {
        let n = n.min(LOG_CAPACITY);
        if n == 0 {
            return Ok(Vec::new());
        }
        self.backend.lrange(LOG_LIST, 0, n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_store::MemoryStore;
    use chrono::TimeZone;

    fn setup() -> ActivityLog {
        ActivityLog::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_record_formats_timestamp_and_action() {
        let log = setup();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        log.record_at("Item criado - Chave: x", at).unwrap();

        assert_eq!(
            log.recent(1).unwrap(),
            vec!["2024-05-01T12:30:00.000Z: Item criado - Chave: x".to_string()]
        );
    }

    #[test]
    fn test_recent_is_most_recent_first() {
        let log = setup();
        log.record("first").unwrap();
        log.record("second").unwrap();
        log.record("third").unwrap();

        let entries = log.recent(10).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].ends_with(": third"));
        assert!(entries[2].ends_with(": first"));
    }

    #[test]
    fn test_eleventh_entry_evicts_oldest() {
        let log = setup();
        for i in 0..10 {
            log.record(&format!("action {i}")).unwrap();
        }
        let entries = log.recent(10).unwrap();
        assert_eq!(entries.len(), 10);
        assert!(entries[9].ends_with(": action 0"));

        log.record("action 10").unwrap();
        let entries = log.recent(10).unwrap();
        assert_eq!(entries.len(), 10);
        assert!(entries[0].ends_with(": action 10"));
        assert!(entries[9].ends_with(": action 1"));
    }

    #[test]
    fn test_recent_caps_at_capacity() {
        let log = setup();
        for i in 0..12 {
            log.record(&format!("action {i}")).unwrap();
        }
        assert_eq!(log.recent(100).unwrap().len(), LOG_CAPACITY);
    }

    #[test]
    fn test_recent_zero() {
        let log = setup();
        log.record("something").unwrap();
        assert!(log.recent(0).unwrap().is_empty());
    }
}
