//! # AquaSentinel Types
//!
//! Shared data model for the groundwater risk engine.
//!
//! - [`RegionProfile`]: immutable per-region reference data
//! - [`Contaminant`]: regulated substances and their fixed safe limits
//! - [`RiskLevel`]: the four-tier risk taxonomy
//! - [`ForecastResult`], [`RiskScoreResult`], [`SimulationResult`]: engine outputs
//!
//! Field names on the serialized shapes are a wire contract consumed by
//! presentation layers and must not change.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod contaminant;
mod forecast;
mod region;
mod report;
mod risk;
mod rounding;
mod simulation;

pub use contaminant::{
    Contaminant, ARSENIC_SAFE_LIMIT_MGL, FLUORIDE_SAFE_LIMIT_MGL, IRON_SAFE_LIMIT_MGL,
};
pub use forecast::{ForecastPoint, ForecastResult};
pub use region::RegionProfile;
pub use report::{ContaminationStatus, NationalStats, RegionDetail, RegionSummary};
pub use risk::{ParseRiskLevelError, RiskLevel, RiskScoreResult};
pub use rounding::{format_decimal, round_to};
pub use simulation::{SimulationInput, SimulationResult, Verdict};
