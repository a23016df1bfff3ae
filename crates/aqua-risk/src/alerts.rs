//! Alert feed for critical and high-risk regions.

use aqua_types::{format_decimal, Contaminant, RegionProfile, RiskLevel};
use serde::{Deserialize, Serialize};

use crate::exceedance::{exceedance, times_over_limit};

/// An active alert for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub state: String,
    pub risk_level: RiskLevel,
    pub depth_m: f64,
    pub depletion_m_per_year: f64,
    pub risk_score: f64,
    pub contamination_alerts: Vec<String>,
}

/// Which regions enter the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    /// Critical and high.
    #[default]
    Active,
    CriticalOnly,
}

impl AlertFilter {
    pub fn admits(self, level: RiskLevel) -> bool {
        match self {
            AlertFilter::Active => matches!(level, RiskLevel::Critical | RiskLevel::High),
            AlertFilter::CriticalOnly => level == RiskLevel::Critical,
        }
    }
}

/// One line per exceeded limit, e.g. `Fluoride 3.2 mg/L (2.1x limit)`.
pub fn alert_lines(region: &RegionProfile) -> Vec<String> {
    Contaminant::ALL
        .iter()
        .copied()
        .filter(|&c| exceedance(region, c))
        .map(|c| {
            format!(
                "{} {} mg/L ({}x limit)",
                c.display_name(),
                format_decimal(region.concentration(c)),
                format_decimal(times_over_limit(region, c))
            )
        })
        .collect()
}

/// Critical regions first, then descending risk score. Stable.
pub fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| {
        let tier = |alert: &Alert| alert.risk_level != RiskLevel::Critical;
        tier(a)
            .cmp(&tier(b))
            .then_with(|| b.risk_score.total_cmp(&a.risk_score))
    });
}

/// Ordered alerts for the regions `filter` admits.
pub fn build_alerts(regions: &[RegionProfile], filter: AlertFilter) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = regions
        .iter()
        .filter(|region| filter.admits(region.risk_level))
        .map(|region| Alert {
            state: region.name.clone(),
            risk_level: region.risk_level,
            depth_m: region.current_depth_m,
            depletion_m_per_year: region.annual_depletion_m_per_year,
            risk_score: region.risk_score,
            contamination_alerts: alert_lines(region),
        })
        .collect();

    sort_alerts(&mut alerts);
    alerts
}
