//! Storage layer for cabinet
//!
//! Provides [`MemoryStore`], an in-process implementation of the
//! [`Backend`](cabinet_core::Backend) contract.

#![warn(missing_docs)]

pub mod memory;

pub use memory::MemoryStore;
