//! Monotonicity of the intervention model in each lever.

use aqua_simulator::{run, simulate};
use aqua_types::{SimulationInput, Verdict};
use proptest::prelude::*;

fn any_input() -> impl Strategy<Value = SimulationInput> {
    (0i32..200, 0i32..=100, 0i32..2000, 0i32..=100)
        .prop_map(|(d, p, r, c)| SimulationInput::new(d, p, r, c))
}

proptest! {
    #[test]
    fn raising_any_lever_never_lowers_outcomes(
        input in any_input(),
        lever in 0usize..4,
        bump in 1i32..50,
    ) {
        let mut raised = input;
        match lever {
            0 => raised.dams += bump,
            1 => raised.drip_pct = (raised.drip_pct + bump).min(100),
            2 => raised.rwh_units += bump,
            _ => raised.crop_diversification_pct = (raised.crop_diversification_pct + bump).min(100),
        }

        let before = simulate(&input);
        let after = simulate(&raised);
        prop_assert!(after.annual_recovery_m >= before.annual_recovery_m);
        prop_assert!(after.crisis_delay_years >= before.crisis_delay_years);
        prop_assert!(after.farmers_benefited_thousands >= before.farmers_benefited_thousands);
        prop_assert!(after.extraction_reduction_pct >= before.extraction_reduction_pct);
        prop_assert!(after.intervention_score >= before.intervention_score);
    }

    #[test]
    fn valid_inputs_always_run(input in any_input()) {
        let result = run(&input).expect("valid input");
        prop_assert!(result.extraction_reduction_pct <= 65);
        prop_assert!(result.annual_recovery_m >= 0.0);
    }
}

#[test]
fn score_boundaries() {
    assert_eq!(simulate(&SimulationInput::new(0, 0, 0, 0)).verdict, Verdict::Insufficient);
    assert_eq!(simulate(&SimulationInput::new(30, 0, 0, 0)).verdict, Verdict::Moderate);
    assert_eq!(simulate(&SimulationInput::new(30, 0, 10, 0)).verdict, Verdict::Strong);
}
