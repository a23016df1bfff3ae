//! Built-in regional groundwater dataset.

use aqua_types::{RegionProfile, RiskLevel};

/// (name, depth m, depletion m/yr, risk, score, lat, lng, fluoride, arsenic, iron)
type SeedRow = (&'static str, f64, f64, RiskLevel, f64, f64, f64, f64, f64, f64);

const SEED: [SeedRow; 23] = [
    ("Rajasthan", 48.0, 8.1, RiskLevel::Critical, 94.0, 27.0, 74.2, 3.2, 0.02, 0.40),
    ("Delhi", 42.0, 7.3, RiskLevel::Critical, 91.0, 28.6, 77.2, 0.8, 0.18, 0.60),
    ("Gujarat", 45.0, 7.8, RiskLevel::Critical, 89.0, 22.3, 71.2, 4.1, 0.01, 0.30),
    ("Andhra Pradesh", 40.0, 6.8, RiskLevel::Critical, 86.0, 15.9, 79.7, 9.2, 0.02, 0.50),
    ("Tamil Nadu", 38.0, 6.2, RiskLevel::Critical, 82.0, 11.1, 78.7, 2.8, 0.03, 0.70),
    ("Punjab", 38.0, 5.8, RiskLevel::High, 78.0, 31.1, 75.3, 0.6, 0.18, 0.40),
    ("Haryana", 34.0, 5.2, RiskLevel::High, 75.0, 29.1, 76.1, 1.8, 0.04, 0.30),
    ("Uttar Pradesh", 36.0, 4.9, RiskLevel::High, 72.0, 26.8, 80.9, 0.5, 0.12, 0.90),
    ("Madhya Pradesh", 32.0, 4.7, RiskLevel::High, 70.0, 23.5, 77.4, 2.4, 0.02, 0.60),
    ("Maharashtra", 30.0, 4.2, RiskLevel::High, 68.0, 19.7, 75.7, 1.9, 0.01, 0.40),
    ("Karnataka", 33.0, 4.5, RiskLevel::High, 65.0, 15.3, 75.7, 2.1, 0.02, 0.50),
    ("Bihar", 31.0, 4.3, RiskLevel::High, 62.0, 25.9, 85.1, 0.4, 0.22, 2.10),
    ("West Bengal", 25.0, 3.2, RiskLevel::Moderate, 50.0, 22.9, 87.8, 0.3, 0.14, 3.80),
    ("Odisha", 22.0, 2.6, RiskLevel::Moderate, 44.0, 20.5, 84.7, 0.4, 0.03, 2.90),
    ("Jharkhand", 24.0, 2.8, RiskLevel::Moderate, 46.0, 23.6, 85.3, 0.3, 0.04, 3.80),
    ("Chhattisgarh", 21.0, 2.4, RiskLevel::Moderate, 40.0, 21.3, 81.6, 0.5, 0.02, 2.20),
    ("Uttarakhand", 22.0, 2.9, RiskLevel::Moderate, 38.0, 30.1, 79.3, 0.4, 0.01, 1.40),
    ("Assam", 16.0, 1.8, RiskLevel::Moderate, 35.0, 26.2, 92.9, 0.3, 0.06, 2.80),
    ("Kerala", 18.0, 2.0, RiskLevel::Moderate, 32.0, 10.8, 76.3, 0.4, 0.01, 1.80),
    ("Himachal Pradesh", 12.0, 1.4, RiskLevel::Low, 18.0, 31.9, 77.1, 0.2, 0.00, 0.40),
    ("Jammu & Kashmir", 18.0, 2.1, RiskLevel::Low, 22.0, 33.7, 76.7, 0.3, 0.00, 0.50),
    ("Goa", 14.0, 1.2, RiskLevel::Low, 15.0, 15.3, 74.0, 0.2, 0.00, 0.30),
    ("Sikkim", 8.0, 0.5, RiskLevel::Low, 10.0, 27.5, 88.5, 0.1, 0.00, 0.20),
];

/// Profiles of the 23 monitored Indian states, in publication order.
pub fn seed_regions() -> Vec<RegionProfile> {
    SEED.iter()
        .map(|&(name, depth, rate, level, score, lat, lng, fluoride, arsenic, iron)| {
            RegionProfile::new(name, depth, rate)
                .with_contamination(fluoride, arsenic, iron)
                .with_location(lat, lng)
                .with_risk(level, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_complete_and_unique() {
        let regions = seed_regions();
        assert_eq!(regions.len(), 23);

        let names: HashSet<_> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), regions.len());
    }

    #[test]
    fn test_seed_values_are_physical() {
        for region in seed_regions() {
            assert!(region.current_depth_m >= 0.0, "{}", region.name);
            assert!(region.fluoride_mgl >= 0.0);
            assert!(region.arsenic_mgl >= 0.0);
            assert!(region.iron_mgl >= 0.0);
            assert!((0.0..=100.0).contains(&region.risk_score));
        }
    }
}
