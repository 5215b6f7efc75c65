//! Error types for the prefix-shingle library.
//!
//! All errors are represented by the [`ShingleError`] enum. Configuration
//! problems are reported as soon as a filter is built, while failures coming
//! from an upstream token source are passed through untouched.
//!
//! # Examples
//!
//! ```
//! use prefix_shingle::error::{ShingleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShingleError::config("max_shingle_size must be >= 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for shingle analysis.
#[derive(Error, Debug)]
pub enum ShingleError {
    /// I/O errors (reading config files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid filter configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, upstream token sources)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Operation not allowed in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ShingleError.
pub type Result<T> = std::result::Result<T, ShingleError>;

impl ShingleError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShingleError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ShingleError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ShingleError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShingleError::config("bad size");
        assert_eq!(err.to_string(), "Configuration error: bad size");

        let err = ShingleError::invalid_operation("already started");
        assert_eq!(err.to_string(), "Invalid operation: already started");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ShingleError = io_err.into();
        assert!(matches!(err, ShingleError::Io(_)));
    }
}
