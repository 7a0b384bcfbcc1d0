//! Error types for the Sherpa library.
//!
//! All failures are represented by the [`SherpaError`] enum. Input
//! validation and missing-resource conditions surface to the caller;
//! collaborator failures (classifier, embedding provider, notification
//! sink) are recovered at the call site with documented fallbacks and
//! never abort an operation.

use std::io;

use thiserror::Error;

/// The main error type for Sherpa operations.
#[derive(Error, Debug)]
pub enum SherpaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or missing input fields.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced ticket or article does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Text analysis errors (normalization, tokenization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Embedding provider errors.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Category/tag classifier errors.
    #[error("Classification error: {0}")]
    Classification(String),

    /// Evaluation errors (bad dataset, unusable labels).
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Storage-related errors.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Notification delivery errors.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SherpaError.
pub type Result<T> = std::result::Result<T, SherpaError>;

impl SherpaError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SherpaError::InvalidInput(msg.into())
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SherpaError::NotFound(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SherpaError::Analysis(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        SherpaError::Embedding(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        SherpaError::Classification(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        SherpaError::Evaluation(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SherpaError::Storage(msg.into())
    }

    /// Create a new delivery error.
    pub fn delivery<S: Into<String>>(msg: S) -> Self {
        SherpaError::Delivery(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SherpaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SherpaError::invalid_input("description required");
        assert_eq!(err.to_string(), "Invalid input: description required");

        let err = SherpaError::not_found("ticket t_9");
        assert_eq!(err.to_string(), "Not found: ticket t_9");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: SherpaError = io_err.into();
        assert!(matches!(err, SherpaError::Io(_)));
    }
}
