//! Primitives layer for cabinet
//!
//! Provides the index maintainers as stateless facades over the backend:
//! - **RecordStore**: primary key -> value records
//! - **ItemIndex**: membership set of all live item keys
//! - **TagIndex**: per-tag sets of item keys
//! - **Metrics**: view ranking and per-item like counters
//! - **ActivityLog**: fixed-length most-recent-first action log
//!
//! [`ItemStore`] composes the five over one shared backend handle and
//! owns the fixed step sequence of every operation.
//!
//! ## Design Principle: Stateless Facades
//!
//! All maintainers are logically stateful but operationally stateless.
//! They hold only an `Arc<dyn Backend>` reference and delegate every
//! operation to the backend. Multiple instances over the same backend
//! are safe, and every individual index write is idempotent.
//!
//! ## Consistency
//!
//! There are no transactions. An operation that touches several
//! structures issues its backend calls in a fixed order, primary record
//! first, and a failure partway through leaves the earlier writes in
//! place. This best-effort model is the contract, not a shortcut.

#![warn(missing_docs)]

pub mod activity_log;
pub mod item_index;
pub mod item_store;
pub mod metrics;
pub mod record;
pub mod tag_index;

pub use activity_log::{ActivityLog, LOG_CAPACITY};
pub use item_index::ItemIndex;
pub use item_store::{ItemStore, LEADERBOARD_SIZE};
pub use metrics::Metrics;
pub use record::RecordStore;
pub use tag_index::TagIndex;
