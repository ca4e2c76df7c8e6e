//! Backend contract
//!
//! [`Backend`] names the primitive operations the key-value service
//! exposes: strings, membership sets, one sorted set family, integer
//! counters, and lists. `cabinet-store` implements it in process; the
//! index maintainers in `cabinet-primitives` are written against this
//! trait only.
//!
//! ## Atomicity
//!
//! Each single call is atomic from the caller's point of view. Sequences
//! of calls are NOT atomic as a unit, and nothing here offers rollback:
//! an operation that spans several calls can be interrupted between them
//! and leave the structures mutually inconsistent. Callers are expected
//! to sequence their calls so that the primary effect lands first.

use crate::error::Result;

/// Primitive operations of the key-value service
///
/// All methods take `&self`; implementations serialize conflicting calls
/// internally. Mutating methods that report a boolean return whether the
/// call changed anything (insert of a new member, removal of a present
/// one), making every index write idempotent and safely retriable.
pub trait Backend: Send + Sync {
    // ===== Strings =====

    /// Store or overwrite a string value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch a string value, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Whether a string key is present
    fn exists(&self, key: &str) -> Result<bool>;

    /// Remove a string key; `true` if a record was actually removed
    fn del(&self, key: &str) -> Result<bool>;

    // ===== Sets =====

    /// Insert a member into a set; `true` if it was not already present
    fn sadd(&self, set: &str, member: &str) -> Result<bool>;

    /// Remove a member from a set; `true` if it was present
    fn srem(&self, set: &str, member: &str) -> Result<bool>;

    /// All members of a set; empty if the set is unknown
    fn smembers(&self, set: &str) -> Result<Vec<String>>;

    /// Cardinality of a set, without materializing the members
    fn scard(&self, set: &str) -> Result<u64>;

    /// Names of all sets whose name starts with `prefix`
    ///
    /// Linear in the number of sets ever created. Used only by tag
    /// cleanup, which deliberately scans every tag set.
    fn set_names(&self, prefix: &str) -> Result<Vec<String>>;

    // ===== Sorted set =====

    /// Increment a member's score in a sorted set, returning the new score
    fn zincr(&self, zset: &str, member: &str, delta: f64) -> Result<f64>;

    /// Up to `n` (member, score) pairs ordered by score descending
    ///
    /// Tie order among equal scores is stable but unspecified; callers
    /// must not depend on it.
    fn ztop(&self, zset: &str, n: usize) -> Result<Vec<(String, f64)>>;

    // ===== Counters =====

    /// Increment an integer counter by one, returning the new total
    ///
    /// A missing counter starts at zero, so the first call returns 1.
    fn incr(&self, key: &str) -> Result<i64>;

    // ===== Lists =====

    /// Prepend a value to a list, creating the list if absent
    fn lpush(&self, list: &str, value: &str) -> Result<()>;

    /// Truncate a list to the inclusive index range `[start, stop]`
    fn ltrim(&self, list: &str, start: usize, stop: usize) -> Result<()>;

    /// Elements in the inclusive index range `[start, stop]`, front first
    fn lrange(&self, list: &str, start: usize, stop: usize) -> Result<Vec<String>>;
}
