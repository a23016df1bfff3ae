//! Engine error types.

use aqua_simulator::SimulatorError;
use aqua_store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::AquaService`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// No region with this name.
    #[error("Region '{0}' not found")]
    RegionNotFound(String),

    /// Risk level filter is not one of low, moderate, high, critical.
    #[error("Invalid risk level '{0}': must be one of low, moderate, high, critical")]
    InvalidRiskLevel(String),

    /// Simulation input rejected.
    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    /// Region data source failed.
    #[error("Region data error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::Config(err.to_string())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
