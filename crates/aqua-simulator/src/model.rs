//! Intervention response model.

use aqua_types::{round_to, SimulationInput, SimulationResult, Verdict};
use tracing::debug;

use crate::error::{SimulatorError, SimulatorResult};

/// Ceiling on the projected extraction reduction, percent.
pub const MAX_EXTRACTION_REDUCTION_PCT: i64 = 65;

const STRONG_SCORE: f64 = 150.0;
const MODERATE_SCORE: f64 = 80.0;

/// Reject negative counts and percentages outside `0..=100`.
pub fn validate(input: &SimulationInput) -> SimulatorResult<()> {
    let counts = [("dams", input.dams), ("rwh_units", input.rwh_units)];
    for (field, value) in counts {
        if value < 0 {
            return Err(SimulatorError::InvalidInput {
                field,
                value,
                reason: "must not be negative",
            });
        }
    }

    let percentages = [
        ("drip_pct", input.drip_pct),
        ("crop_diversification", input.crop_diversification_pct),
    ];
    for (field, value) in percentages {
        if !(0..=100).contains(&value) {
            return Err(SimulatorError::InvalidInput {
                field,
                value,
                reason: "must be a percentage between 0 and 100",
            });
        }
    }

    Ok(())
}

/// Project the outcome of `input`. Pure; does not validate.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let dams = f64::from(input.dams);
    let drip = f64::from(input.drip_pct);
    let rwh = f64::from(input.rwh_units);
    let crop = f64::from(input.crop_diversification_pct);

    let recovery = dams * 0.09 + drip * 0.014 + rwh * 0.004 + crop * 0.012;
    let delay = dams * 0.45 + drip * 0.07 + rwh * 0.018 + crop * 0.06;
    let farmers = (dams * 850.0 + drip * 180.0 + rwh * 5.0 + crop * 120.0) / 1000.0;
    let extraction = drip * 0.25 + rwh * 0.04 + crop * 0.18;
    let score = dams * 5.0 + drip * 0.5 + rwh * 0.1 + crop * 0.5;

    // Verdict reads the unrounded score.
    let verdict = if score > STRONG_SCORE {
        Verdict::Strong
    } else if score > MODERATE_SCORE {
        Verdict::Moderate
    } else {
        Verdict::Insufficient
    };

    SimulationResult {
        annual_recovery_m: round_to(recovery, 2),
        crisis_delay_years: delay.round_ties_even() as i64,
        farmers_benefited_thousands: farmers.round_ties_even() as i64,
        extraction_reduction_pct: (extraction.round_ties_even() as i64)
            .min(MAX_EXTRACTION_REDUCTION_PCT),
        intervention_score: score.round_ties_even() as i64,
        verdict,
        recommendation: verdict.recommendation().to_string(),
    }
}

/// Validate, then simulate.
pub fn run(input: &SimulationInput) -> SimulatorResult<SimulationResult> {
    validate(input)?;
    let result = simulate(input);
    debug!(
        score = result.intervention_score,
        verdict = ?result.verdict,
        "Simulation computed"
    );
    Ok(result)
}
