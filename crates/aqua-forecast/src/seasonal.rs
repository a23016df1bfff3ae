//! Closed-form seasonal-trend fallback model.

use std::f64::consts::PI;
use std::sync::Mutex;

use aqua_types::{round_to, ForecastPoint};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::predictor::HISTORY_MONTHS;

/// Model name reported when the seasonal fallback produced a forecast.
pub const SEASONAL_MODEL_NAME: &str =
    "Mathematical Simulation (seasonal fallback, no trained model)";

/// Amplitude of the yearly sinusoid, metres.
const SEASONAL_AMPLITUDE_M: f64 = 1.5;

/// Bound on the uniform jitter added to reconstructed history, metres.
const HISTORY_JITTER_M: f64 = 0.3;

/// Half-width of the confidence band per month ahead, metres.
pub(crate) const BAND_STEP_M: f64 = 0.4;

/// Linear depletion trend plus a 12-month sinusoid.
///
/// Reconstructed history carries bounded jitter drawn from an injectable
/// random source; projections carry a band that widens by
/// [`BAND_STEP_M`] each month instead.
pub struct SeasonalModel {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl SeasonalModel {
    /// Model with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Model whose jitter sequence is fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Model drawing jitter from `rng`.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn name(&self) -> &'static str {
        SEASONAL_MODEL_NAME
    }

    /// Seasonal offset for month index `month` (period 12).
    pub fn seasonal_offset(month: usize) -> f64 {
        SEASONAL_AMPLITUDE_M * (2.0 * PI * month as f64 / 12.0).sin()
    }

    /// Twelve reconstructed monthly depths, oldest first, rounded to 2 dp.
    pub fn history(&self, current_depth: f64, annual_rate: f64) -> Vec<f64> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        (1..=HISTORY_MONTHS)
            .rev()
            .map(|months_ago| {
                let trend = current_depth - annual_rate * months_ago as f64 / 12.0;
                let jitter = rng.gen_range(-HISTORY_JITTER_M..=HISTORY_JITTER_M);
                round_to(trend + Self::seasonal_offset(months_ago) + jitter, 2)
            })
            .collect()
    }

    /// `steps` projected months with a band of `±0.4 · month`.
    pub fn projection(
        &self,
        current_depth: f64,
        annual_rate: f64,
        steps: usize,
    ) -> Vec<ForecastPoint> {
        (1..=steps)
            .map(|month| {
                let projected = current_depth
                    + annual_rate * month as f64 / 12.0
                    + Self::seasonal_offset(HISTORY_MONTHS + month);
                let band = BAND_STEP_M * month as f64;
                ForecastPoint {
                    month: month as u32,
                    predicted_depth: round_to(projected, 2),
                    lower_bound: round_to(projected - band, 2),
                    upper_bound: round_to(projected + band, 2),
                }
            })
            .collect()
    }

    /// History and projection together.
    pub fn project(
        &self,
        current_depth: f64,
        annual_rate: f64,
        steps: usize,
    ) -> (Vec<f64>, Vec<ForecastPoint>) {
        (
            self.history(current_depth, annual_rate),
            self.projection(current_depth, annual_rate, steps),
        )
    }
}

impl Default for SeasonalModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SeasonalModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonalModel").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_projection_values() {
        let model = SeasonalModel::seeded(1);
        let points = model.projection(20.0, 0.0, 6);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].month, 1);
        assert_eq!(points[0].predicted_depth, 20.75);

        // Seasonal peak three months ahead.
        assert_eq!(points[2].predicted_depth, 21.5);
        assert_eq!(points[2].lower_bound, 20.3);
        assert_eq!(points[2].upper_bound, 22.7);

        assert_eq!(points[5].predicted_depth, 20.0);
        assert_eq!(points[5].lower_bound, 17.6);
        assert_eq!(points[5].upper_bound, 22.4);
    }

    #[test]
    fn test_same_seed_same_history() {
        let a = SeasonalModel::seeded(42).history(48.0, 8.1);
        let b = SeasonalModel::seeded(42).history(48.0, 8.1);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn test_history_from_fixed_rng() {
        // Zero bits draw the bottom of the jitter range.
        let low = SeasonalModel::with_rng(StepRng::new(0, 0)).history(30.0, 0.0);
        assert_eq!(low[0], 29.7);
        assert_eq!(low[3], 28.2);
        assert_eq!(low[6], 29.7);
        assert_eq!(low[9], 31.2);

        // All-ones bits draw the top.
        let high = SeasonalModel::with_rng(StepRng::new(u64::MAX, 0)).history(30.0, 0.0);
        assert_eq!(high[0], 30.3);
        assert_eq!(high[3], 28.8);
        assert_eq!(high[9], 31.8);
    }

    #[test]
    fn test_history_jitter_is_bounded() {
        let model = SeasonalModel::seeded(9);
        for _ in 0..50 {
            let history = model.history(30.0, 4.2);
            for (i, value) in history.iter().enumerate() {
                let months_ago = 12 - i;
                let expected = 30.0 - 4.2 * months_ago as f64 / 12.0
                    + SeasonalModel::seasonal_offset(months_ago);
                assert!(
                    (value - expected).abs() <= HISTORY_JITTER_M + 0.005 + 1e-9,
                    "month {} drifted: {} vs {}",
                    i,
                    value,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_history_is_oldest_first() {
        // Steep depletion dominates seasonality and jitter.
        let history = SeasonalModel::seeded(3).history(40.0, 120.0);
        assert!(history[0] < history[11]);
    }
}
