//! Depth forecast result shapes.

use serde::{Deserialize, Serialize};

/// One projected month with its confidence band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Months ahead of the current reading, starting at 1.
    pub month: u32,
    pub predicted_depth: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ForecastPoint {
    /// Width of the confidence band.
    pub fn band_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Water-table depth forecast for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    #[serde(rename = "state")]
    pub region: String,

    #[serde(rename = "current_depth_m")]
    pub current_depth: f64,

    #[serde(rename = "annual_depletion_m")]
    pub annual_rate: f64,

    #[serde(rename = "model")]
    pub model_name: String,

    pub confidence: f64,

    /// Twelve monthly depths, oldest first.
    #[serde(rename = "historical_12m")]
    pub historical: Vec<f64>,

    #[serde(rename = "forecast_6m")]
    pub forecast: Vec<ForecastPoint>,

    pub will_reach_critical: bool,

    pub months_to_crisis: Option<u32>,
}
