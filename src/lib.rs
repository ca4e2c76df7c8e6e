//! Cabinet - a small HTTP facade over a key-value store
//!
//! Cabinet stores string items in a key-value backend and keeps a set of
//! secondary indexes (item index, per-tag sets, view/like counters, a
//! fixed-length activity log) manually in sync with the primary records.
//!
//! # Quick Start
//!
//! ```ignore
//! use cabinet::{ItemStore, MemoryStore};
//! use std::sync::Arc;
//!
//! let store = ItemStore::new(Arc::new(MemoryStore::new()));
//!
//! store.create("fruit:1", "banana", Some("fruit, yellow"))?;
//! let value = store.fetch("fruit:1")?;
//! ```
//!
//! # Architecture
//!
//! The [`Backend`] trait names the primitive operations the key-value
//! service offers (strings, sets, a sorted set, counters, lists). Each
//! primitive call is atomic on its own; sequences of calls are not, and
//! no operation here attempts cross-call rollback. [`ItemStore`] composes
//! the index maintainers over one shared backend handle.

pub use cabinet_core::{Backend, Error, Result};
pub use cabinet_primitives::{
    ActivityLog, ItemIndex, ItemStore, Metrics, RecordStore, TagIndex,
};
pub use cabinet_store::MemoryStore;
