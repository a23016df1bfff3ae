//! Simulator errors.

use thiserror::Error;

/// Errors raised before a simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    /// A lever is out of its allowed range.
    #[error("invalid {field} = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: i32,
        reason: &'static str,
    },

    /// No preset with this name.
    #[error("unknown preset '{0}', expected one of: minimal, moderate, aggressive")]
    UnknownPreset(String),
}

/// Result type for simulator operations.
pub type SimulatorResult<T> = Result<T, SimulatorError>;
