//! Classifier error types.

use thiserror::Error;

/// Errors raised while classifying or evaluating text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
