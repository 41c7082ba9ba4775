//! Error types for the stembayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BayesError`] enum. The classifier core itself never fails for
//! well-typed input; errors come from building an analyzer, from the
//! optional initial-state validation, and from loading corpora.
//!
//! # Examples
//!
//! ```
//! use stembayes::error::{BayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayesError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stembayes operations.
#[derive(Error, Debug)]
pub enum BayesError {
    /// I/O errors (corpus and stop-word files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed training corpus.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A frequency store that violates the model invariants.
    #[error("Invalid model state: {0}")]
    InvalidState(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with BayesError.
pub type Result<T> = std::result::Result<T, BayesError>;

impl BayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BayesError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        BayesError::Corpus(msg.into())
    }

    /// Create a new invalid state error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        BayesError::InvalidState(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BayesError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BayesError::Other(msg.into())
    }
}
