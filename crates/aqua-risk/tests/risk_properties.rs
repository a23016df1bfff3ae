//! Property tests for scoring, limit ratios and alert ordering.

use aqua_risk::{
    blend_score, build_alerts, times_over, AlertFilter, RiskFeatures, RiskScorer,
};
use aqua_types::{Contaminant, RegionProfile, RiskLevel};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = RiskLevel> {
    prop::sample::select(RiskLevel::ALL.to_vec())
}

fn any_contaminant() -> impl Strategy<Value = Contaminant> {
    prop::sample::select(Contaminant::ALL.to_vec())
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    #[test]
    fn blended_score_is_bounded(
        label in any_level(),
        probabilities in prop::array::uniform4(-10.0f64..10.0),
    ) {
        let score = blend_score(label, &probabilities);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn rule_based_score_is_bounded(
        depth_m in -1e6f64..1e6,
        extraction_rate in -1e3f64..1e3,
        fluoride_hist in 0.0f64..50.0,
        arsenic_hist in 0.0f64..5.0,
    ) {
        let features = RiskFeatures {
            depth_m,
            extraction_rate,
            fluoride_hist,
            arsenic_hist,
            ..RiskFeatures::default()
        };
        let result = block_on(RiskScorer::rule_based().score_contamination("Prop", &features));
        prop_assert!((0.0..=100.0).contains(&result.score));
    }

    #[test]
    fn times_over_matches_ratio(
        concentration in 0.0001f64..100.0,
        contaminant in any_contaminant(),
    ) {
        let expected = (concentration / contaminant.safe_limit() * 10.0).round_ties_even() / 10.0;
        prop_assert_eq!(times_over(concentration, contaminant), expected);
    }

    #[test]
    fn critical_alerts_lead_and_scores_descend(
        entries in prop::collection::vec((any_level(), 0.0f64..100.0), 0..30),
    ) {
        let regions: Vec<RegionProfile> = entries
            .iter()
            .enumerate()
            .map(|(i, (level, score))| {
                RegionProfile::new(format!("R{}", i), 30.0, 2.0).with_risk(*level, *score)
            })
            .collect();

        let alerts = build_alerts(&regions, AlertFilter::Active);
        for pair in alerts.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(matches!(a.risk_level, RiskLevel::Critical | RiskLevel::High));
            if a.risk_level == b.risk_level {
                prop_assert!(a.risk_score >= b.risk_score);
            } else {
                prop_assert_eq!(a.risk_level, RiskLevel::Critical);
            }
        }
    }
}

#[test]
fn zero_concentration_is_zero_times_over() {
    for contaminant in Contaminant::ALL {
        assert_eq!(times_over(0.0, contaminant), 0.0);
    }
}

#[tokio::test]
async fn default_features_score_in_range() {
    let result = RiskScorer::default()
        .score_contamination("Defaults", &RiskFeatures::default())
        .await;
    assert!((0.0..=100.0).contains(&result.score));
}
