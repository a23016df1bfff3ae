//! Listing and statistics shapes served alongside the engine results.

use serde::{Deserialize, Serialize};

use crate::region::RegionProfile;
use crate::risk::RiskLevel;

/// One row of the all-regions listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub state: String,
    pub depth_m: f64,
    pub depletion_per_year: f64,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&RegionProfile> for RegionSummary {
    fn from(region: &RegionProfile) -> Self {
        Self {
            state: region.name.clone(),
            depth_m: region.current_depth_m,
            depletion_per_year: region.annual_depletion_m_per_year,
            risk_level: region.risk_level,
            risk_score: region.risk_score,
            latitude: region.latitude,
            longitude: region.longitude,
        }
    }
}

/// Contamination block of a region detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminationStatus {
    pub fluoride_mgl: f64,
    pub arsenic_mgl: f64,
    pub iron_mgl: f64,
    pub fluoride_safe: bool,
    pub arsenic_safe: bool,
    pub iron_safe: bool,
    pub fluoride_times_limit: f64,
    pub arsenic_times_limit: f64,
    pub iron_times_limit: f64,
}

/// Single-region detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDetail {
    #[serde(flatten)]
    pub summary: RegionSummary,
    pub contamination: ContaminationStatus,
}

/// Nationwide aggregate over all regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalStats {
    pub total_states: usize,
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub fluoride_exceed_pct: f64,
    pub arsenic_exceed_pct: f64,
    pub iron_exceed_pct: f64,
    pub cities_at_risk: u32,
    pub farmers_covered_million: u32,
    pub panchayats: u32,
    pub groundwater_lost_km3: u32,
    pub india_global_usage_pct: u32,
}
