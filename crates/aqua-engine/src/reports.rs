//! Listing and aggregate views over the region data.

use aqua_risk::{exceedance, times_over_limit};
use aqua_types::{
    round_to, Contaminant, ContaminationStatus, NationalStats, RegionDetail, RegionProfile,
    RegionSummary, RiskLevel,
};

// Published national headline figures. Not derived from the region data.
const CITIES_AT_RISK: u32 = 21;
const FARMERS_COVERED_MILLION: u32 = 700;
const PANCHAYATS: u32 = 6500;
const GROUNDWATER_LOST_KM3: u32 = 450;
const INDIA_GLOBAL_USAGE_PCT: u32 = 25;

fn count_at(regions: &[RegionProfile], level: RiskLevel) -> usize {
    regions.iter().filter(|r| r.risk_level == level).count()
}

fn exceed_pct(regions: &[RegionProfile], contaminant: Contaminant) -> f64 {
    if regions.is_empty() {
        return 0.0;
    }
    let exceeding = regions.iter().filter(|r| exceedance(r, contaminant)).count();
    round_to(exceeding as f64 / regions.len() as f64 * 100.0, 1)
}

/// Risk tier counts and limit-exceedance shares across `regions`.
pub fn national_stats(regions: &[RegionProfile]) -> NationalStats {
    NationalStats {
        total_states: regions.len(),
        critical: count_at(regions, RiskLevel::Critical),
        high: count_at(regions, RiskLevel::High),
        moderate: count_at(regions, RiskLevel::Moderate),
        low: count_at(regions, RiskLevel::Low),
        fluoride_exceed_pct: exceed_pct(regions, Contaminant::Fluoride),
        arsenic_exceed_pct: exceed_pct(regions, Contaminant::Arsenic),
        iron_exceed_pct: exceed_pct(regions, Contaminant::Iron),
        cities_at_risk: CITIES_AT_RISK,
        farmers_covered_million: FARMERS_COVERED_MILLION,
        panchayats: PANCHAYATS,
        groundwater_lost_km3: GROUNDWATER_LOST_KM3,
        india_global_usage_pct: INDIA_GLOBAL_USAGE_PCT,
    }
}

pub fn region_detail(region: &RegionProfile) -> RegionDetail {
    RegionDetail {
        summary: RegionSummary::from(region),
        contamination: ContaminationStatus {
            fluoride_mgl: region.fluoride_mgl,
            arsenic_mgl: region.arsenic_mgl,
            iron_mgl: region.iron_mgl,
            fluoride_safe: !exceedance(region, Contaminant::Fluoride),
            arsenic_safe: !exceedance(region, Contaminant::Arsenic),
            iron_safe: !exceedance(region, Contaminant::Iron),
            fluoride_times_limit: times_over_limit(region, Contaminant::Fluoride),
            arsenic_times_limit: times_over_limit(region, Contaminant::Arsenic),
            iron_times_limit: times_over_limit(region, Contaminant::Iron),
        },
    }
}
