//! Risk taxonomy and contamination risk score result.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Four-tier risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels in classifier class-index order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Class index used by the contamination classifier.
    pub const fn index(self) -> usize {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Moderate => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown risk level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk level '{0}', expected one of: low, moderate, high, critical")]
pub struct ParseRiskLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(ParseRiskLevelError(s.to_string())),
        }
    }
}

/// Continuous contamination risk score for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreResult {
    #[serde(rename = "state")]
    pub region: String,

    /// Score in [0, 100], one decimal.
    #[serde(rename = "risk_score")]
    pub score: f64,

    #[serde(rename = "risk_level")]
    pub label: RiskLevel,

    #[serde(rename = "model")]
    pub source_model_name: String,
}
