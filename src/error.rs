//! Error types for the Banter library.
//!
//! All errors are represented by the [`BanterError`] enum. Degraded pipeline
//! outcomes (no intent matched, empty utterance after filtering, missing reply
//! table) are *not* errors — they fall through to an empty reply. `BanterError`
//! is reserved for real faults such as registry validation or I/O.
//!
//! # Examples
//!
//! ```
//! use banter::error::{BanterError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BanterError::intent("duplicate intent name"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Banter operations.
#[derive(Error, Debug)]
pub enum BanterError {
    /// I/O errors (reading the session input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, lemmatization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Intent registry errors (validation, registration)
    #[error("Intent error: {0}")]
    Intent(String),

    /// Response selection errors
    #[error("Response error: {0}")]
    Response(String),

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

/// Result type alias for operations that may fail with BanterError.
pub type Result<T> = std::result::Result<T, BanterError>;

impl BanterError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BanterError::Analysis(msg.into())
    }

    /// Create a new intent error.
    pub fn intent<S: Into<String>>(msg: S) -> Self {
        BanterError::Intent(msg.into())
    }

    /// Create a new response error.
    pub fn response<S: Into<String>>(msg: S) -> Self {
        BanterError::Response(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BanterError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BanterError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
