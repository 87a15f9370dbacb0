//! Error types for the lexmatch library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`LexmatchError`]. Contract violations such as a zero n-gram size are
//! reported as [`LexmatchError::InvalidArgument`].
//!
//! # Examples
//!
//! ```
//! use lexmatch::error::{LexmatchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexmatchError::invalid_argument("n-gram size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexmatch operations.
#[derive(Error, Debug)]
pub enum LexmatchError {
    /// I/O errors (dictionary and corpus files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller passed a value outside the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexmatchError.
pub type Result<T> = std::result::Result<T, LexmatchError>;

impl LexmatchError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexmatchError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexmatchError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexmatchError::invalid_argument("n must be >= 1");
        assert_eq!(error.to_string(), "Invalid argument: n must be >= 1");

        let error = LexmatchError::other("something broke");
        assert_eq!(error.to_string(), "Error: something broke");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexmatchError::from(io_error);

        match error {
            LexmatchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = LexmatchError::from(json_error);
        assert!(matches!(error, LexmatchError::Json(_)));
    }
}
