//! Safe-limit exceedance checks.

use aqua_types::{round_to, Contaminant, RegionProfile};
use serde::{Deserialize, Serialize};

/// Whether the region's concentration is strictly above the safe limit.
pub fn exceedance(region: &RegionProfile, contaminant: Contaminant) -> bool {
    region.concentration(contaminant) > contaminant.safe_limit()
}

/// Concentration as a multiple of the safe limit, 1 decimal.
pub fn times_over(concentration: f64, contaminant: Contaminant) -> f64 {
    if concentration == 0.0 {
        return 0.0;
    }
    round_to(concentration / contaminant.safe_limit(), 1)
}

/// The region's concentration as a multiple of the safe limit, 1 decimal.
pub fn times_over_limit(region: &RegionProfile, contaminant: Contaminant) -> f64 {
    times_over(region.concentration(contaminant), contaminant)
}

/// One exceeded limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminationIssue {
    #[serde(rename = "type")]
    pub contaminant: Contaminant,
    pub value: f64,
    pub limit: f64,
    pub times_over: f64,
}

/// Every exceeded limit in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminationAlert {
    pub state: String,
    pub issues: Vec<ContaminationIssue>,
}

/// Exceeded limits for `region`, fluoride, arsenic, iron order.
pub fn contamination_issues(region: &RegionProfile) -> Vec<ContaminationIssue> {
    Contaminant::ALL
        .iter()
        .copied()
        .filter(|&c| exceedance(region, c))
        .map(|c| ContaminationIssue {
            contaminant: c,
            value: region.concentration(c),
            limit: c.safe_limit(),
            times_over: times_over_limit(region, c),
        })
        .collect()
}

/// Regions with at least one exceeded limit, in input order.
pub fn contamination_report(regions: &[RegionProfile]) -> Vec<ContaminationAlert> {
    regions
        .iter()
        .filter_map(|region| {
            let issues = contamination_issues(region);
            (!issues.is_empty()).then(|| ContaminationAlert {
                state: region.name.clone(),
                issues,
            })
        })
        .collect()
}
