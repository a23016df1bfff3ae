//! # AquaSentinel Engine
//!
//! Service facade over groundwater depletion forecasting, contamination risk
//! scoring and policy simulation.
//!
//! ## Overview
//!
//! [`AquaService`] wires together:
//! - a region data source ([`aqua_store::RegionStore`])
//! - a best-effort result cache ([`aqua_store::ResultCache`])
//! - the forecast engine, with a trained predictor when one answered the
//!   startup probe and the seasonal model otherwise
//! - the risk scorer, with a trained classifier or the rule-based one
//! - the stateless intervention simulator
//!
//! Model availability is decided once, in [`ModelRegistry::detect`], and
//! never re-probed.
//!
//! ## Example
//!
//! ```no_run
//! use aqua_engine::{AquaService, EngineConfig};
//!
//! # async fn run() -> Result<(), aqua_engine::EngineError> {
//! let config = EngineConfig::load(None)?;
//! let service = AquaService::from_config(&config).await?;
//!
//! let forecast = service.forecast("Rajasthan").await?;
//! assert_eq!(forecast.forecast.len(), 6);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod config;
mod error;
mod models;
mod reports;
mod service;

pub use config::{CacheConfig, DataConfig, EngineConfig, LoggingConfig, ModelsConfig};
pub use error::{EngineError, EngineResult};
pub use models::{ModelAvailability, ModelRegistry};
pub use reports::{national_stats, region_detail};
pub use service::{
    forecast_cache_key, AquaService, ALERTS_CACHE_KEY, REGIONS_CACHE_KEY, STATS_CACHE_KEY,
};
