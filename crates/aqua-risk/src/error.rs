//! Error types for contamination classifiers.

use thiserror::Error;

/// Errors raised by a contamination classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Classifier endpoint could not be reached or answered with an error.
    #[error("classifier transport error: {0}")]
    Transport(String),

    /// Classifier ran but reported a failure.
    #[error("classifier {model} failed: {reason}")]
    Failed { model: String, reason: String },

    /// Classifier output could not be used.
    #[error("malformed classifier output: {0}")]
    MalformedOutput(String),

    /// Classifier could not be constructed.
    #[error("invalid classifier configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        ClassifierError::Transport(err.to_string())
    }
}

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;
