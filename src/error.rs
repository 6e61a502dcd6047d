//! Error types for the Sabia library.
//!
//! All errors are represented by the [`SabiaError`] enum. Linguistic edge
//! cases (short words, digits inside a word, excluded terms) are never errors;
//! only misuse of the API and configuration problems surface here.
//!
//! # Examples
//!
//! ```
//! use sabia::error::{SabiaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SabiaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sabia operations.
///
/// This enum uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum SabiaError {
    /// I/O errors (reading configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller passed an argument the operation cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SabiaError.
pub type Result<T> = std::result::Result<T, SabiaError>;

impl SabiaError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SabiaError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SabiaError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SabiaError::invalid_argument("missing input");
        assert_eq!(error.to_string(), "Invalid argument: missing input");

        let error = SabiaError::invalid_config("unknown version");
        assert_eq!(error.to_string(), "Invalid configuration: unknown version");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sabia_error = SabiaError::from(io_error);

        match sabia_error {
            SabiaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let sabia_error = SabiaError::from(json_error);

        assert!(matches!(sabia_error, SabiaError::Json(_)));
    }
}
