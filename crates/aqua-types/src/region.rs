//! Per-region reference data.

use serde::{Deserialize, Serialize};

use crate::contaminant::Contaminant;
use crate::risk::RiskLevel;

/// Immutable groundwater profile of one region.
///
/// Owned by the region data source; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Unique region name.
    pub name: String,

    /// Current water-table depth in metres.
    pub current_depth_m: f64,

    /// Annual decline in metres; negative means net recharge.
    pub annual_depletion_m_per_year: f64,

    pub fluoride_mgl: f64,
    pub arsenic_mgl: f64,
    pub iron_mgl: f64,

    pub latitude: f64,
    pub longitude: f64,

    /// Published risk tier for the region.
    pub risk_level: RiskLevel,

    /// Published 0-100 risk score for the region.
    pub risk_score: f64,
}

impl RegionProfile {
    /// Create a profile with no contamination, no location and low risk.
    pub fn new(
        name: impl Into<String>,
        current_depth_m: f64,
        annual_depletion_m_per_year: f64,
    ) -> Self {
        Self {
            name: name.into(),
            current_depth_m,
            annual_depletion_m_per_year,
            fluoride_mgl: 0.0,
            arsenic_mgl: 0.0,
            iron_mgl: 0.0,
            latitude: 0.0,
            longitude: 0.0,
            risk_level: RiskLevel::Low,
            risk_score: 0.0,
        }
    }

    /// Set contaminant concentrations (mg/L).
    pub fn with_contamination(mut self, fluoride: f64, arsenic: f64, iron: f64) -> Self {
        self.fluoride_mgl = fluoride;
        self.arsenic_mgl = arsenic;
        self.iron_mgl = iron;
        self
    }

    /// Set coordinates.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the published risk tier and score.
    pub fn with_risk(mut self, level: RiskLevel, score: f64) -> Self {
        self.risk_level = level;
        self.risk_score = score;
        self
    }

    /// Concentration of `contaminant` in mg/L.
    pub fn concentration(&self, contaminant: Contaminant) -> f64 {
        match contaminant {
            Contaminant::Fluoride => self.fluoride_mgl,
            Contaminant::Arsenic => self.arsenic_mgl,
            Contaminant::Iron => self.iron_mgl,
        }
    }
}
