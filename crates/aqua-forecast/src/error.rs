//! Error types for sequence predictors.

use thiserror::Error;

/// Errors raised by a sequence predictor.
///
/// The forecast engine never returns these; it substitutes the seasonal
/// model and logs them.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Predictor endpoint could not be reached or answered with an error.
    #[error("predictor transport error: {0}")]
    Transport(String),

    /// Predictor ran but reported a failure.
    #[error("predictor {model} failed: {reason}")]
    Failed { model: String, reason: String },

    /// Predictor returned the wrong number of points.
    #[error("predictor returned {actual} points, expected {expected}")]
    UnexpectedOutput { expected: usize, actual: usize },

    /// Predictor returned NaN or infinity.
    #[error("predictor returned a non-finite value at step {step}")]
    NonFinite { step: usize },

    /// Predictor could not be constructed.
    #[error("invalid predictor configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for PredictorError {
    fn from(err: reqwest::Error) -> Self {
        PredictorError::Transport(err.to_string())
    }
}

/// Result type for predictor operations.
pub type PredictorResult<T> = Result<T, PredictorError>;
