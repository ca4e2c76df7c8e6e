//! Error types for cabinet
//!
//! One error enum for the whole workspace. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for cabinet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cabinet
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (bind, connection, etc.)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Failure communicating with the key-value backend
    ///
    /// Surfaced to HTTP callers as a generic 500; the detail in this
    /// variant goes to the operational log only.
    #[error("backend error: {0}")]
    Backend(String),

    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_display_backend() {
        let err = Error::Backend("connection reset".to_string());
        let msg = err.to_string();
        assert!(msg.contains("backend error"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("key must not be empty".to_string());
        assert_eq!(err.to_string(), "key must not be empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
