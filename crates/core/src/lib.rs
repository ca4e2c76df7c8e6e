//! Core layer for cabinet
//!
//! Defines the pieces every other crate agrees on:
//! - [`Error`] / [`Result`]: the single error type used throughout
//! - [`Backend`]: the contract describing the key-value service's
//!   primitive operations
//!
//! The backend is treated as an external service with no cross-call
//! atomicity: each primitive call succeeds or fails on its own, and the
//! layers above never assume two calls commit together.

#![warn(missing_docs)]

pub mod backend;
pub mod error;

pub use backend::Backend;
pub use error::{Error, Result};
