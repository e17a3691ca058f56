//! Error types for the respell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RespellError`] enum.
//!
//! # Examples
//!
//! ```
//! use respell::error::{RespellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RespellError::config("max_suggestions must be non-zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for respell operations.
///
/// Construction-time failures (unreadable or empty dictionaries, invalid
/// configuration) surface through this enum. Per-word suggestion flow never
/// errors: "no suggestions found" is an ordinary result, not a failure.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (dictionary file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (empty source, malformed word list)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors (invalid engine parameters)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        RespellError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RespellError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RespellError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = RespellError::config("Test config error");
        assert_eq!(error.to_string(), "Configuration error: Test config error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let respell_error = RespellError::from(io_error);

        match respell_error {
            RespellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
