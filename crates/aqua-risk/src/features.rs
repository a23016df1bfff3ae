//! Classifier feature vector.

use aqua_types::RegionProfile;
use serde::{Deserialize, Serialize};

/// Inputs to the contamination classifier.
///
/// Any field missing from a decoded payload takes its median-like default,
/// so partial input never fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFeatures {
    pub depth_m: f64,
    pub extraction_rate: f64,
    pub geology_score: f64,
    pub rainfall_mm: f64,
    pub fluoride_hist: f64,
    pub arsenic_hist: f64,
    pub iron_hist: f64,
}

impl Default for RiskFeatures {
    fn default() -> Self {
        Self {
            depth_m: 20.0,
            extraction_rate: 3.0,
            geology_score: 0.5,
            rainfall_mm: 800.0,
            fluoride_hist: 0.5,
            arsenic_hist: 0.01,
            iron_hist: 0.3,
        }
    }
}

impl RiskFeatures {
    /// Features known for a region; geology and rainfall keep their defaults.
    pub fn from_region(region: &RegionProfile) -> Self {
        Self {
            depth_m: region.current_depth_m,
            extraction_rate: region.annual_depletion_m_per_year,
            fluoride_hist: region.fluoride_mgl,
            arsenic_hist: region.arsenic_mgl,
            iron_hist: region.iron_mgl,
            ..Self::default()
        }
    }
}
