//! Error types for the termcheck library.
//!
//! All errors are represented by the [`TermcheckError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use termcheck::error::{Result, TermcheckError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermcheckError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for termcheck operations.
#[derive(Error, Debug)]
pub enum TermcheckError {
    /// I/O errors (reading the input file, writing the report)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmentation, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

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

/// Result type alias for operations that may fail with TermcheckError.
pub type Result<T> = std::result::Result<T, TermcheckError>;

impl TermcheckError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermcheckError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TermcheckError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TermcheckError::Other(msg.into())
    }
}
