//! Policy intervention simulator value objects.

use serde::{Deserialize, Serialize};

/// Magnitudes of the four mitigation levers.
///
/// Fields are signed so malformed requests reach validation intact instead
/// of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Check dams built.
    pub dams: i32,

    /// Share of farmland moved to drip irrigation, percent.
    pub drip_pct: i32,

    /// Rainwater harvesting units installed.
    pub rwh_units: i32,

    /// Share of farmland moved to less water-intensive crops, percent.
    #[serde(rename = "crop_diversification")]
    pub crop_diversification_pct: i32,
}

impl SimulationInput {
    pub const fn new(
        dams: i32,
        drip_pct: i32,
        rwh_units: i32,
        crop_diversification_pct: i32,
    ) -> Self {
        Self {
            dams,
            drip_pct,
            rwh_units,
            crop_diversification_pct,
        }
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self::new(3, 30, 100, 20)
    }
}

/// Qualitative verdict for an intervention bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Insufficient,
    Moderate,
    Strong,
}

impl Verdict {
    /// Recommendation text shown alongside the verdict.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Verdict::Strong => {
                "Strong intervention. Significant recovery projected. Recommend immediate policy adoption."
            }
            Verdict::Moderate => {
                "Moderate intervention. Meaningful impact but insufficient alone. Increase targets."
            }
            Verdict::Insufficient => {
                "Insufficient. Crisis timeline largely unchanged. Scale up all measures significantly."
            }
        }
    }
}

/// Projected outcome of an intervention bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub annual_recovery_m: f64,
    pub crisis_delay_years: i64,
    pub farmers_benefited_thousands: i64,
    /// Capped at 65.
    pub extraction_reduction_pct: i64,
    pub intervention_score: i64,
    pub verdict: Verdict,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let input = SimulationInput::default();
        assert_eq!(input, SimulationInput::new(3, 30, 100, 20));
    }

    #[test]
    fn test_input_wire_names() {
        let input: SimulationInput = serde_json::from_str(
            r#"{"dams": 2, "drip_pct": 15, "rwh_units": 50, "crop_diversification": 10}"#,
        )
        .unwrap();
        assert_eq!(input.crop_diversification_pct, 10);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Strong).unwrap(), "\"strong\"");
    }
}
