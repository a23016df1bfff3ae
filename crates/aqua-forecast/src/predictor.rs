//! Sequence predictor contract.

use async_trait::async_trait;

use crate::error::PredictorResult;

/// Length of the monthly history fed to a predictor.
pub const HISTORY_MONTHS: usize = 12;

/// Trained model that extends a monthly depth series.
///
/// Implementations are selected once at startup and shared across requests.
#[async_trait]
pub trait SequencePredictor: Send + Sync {
    /// Predict `steps` future monthly depths following `history` (oldest first).
    async fn predict(&self, history: &[f64], steps: usize) -> PredictorResult<Vec<f64>>;

    /// Model identity reported in forecast results.
    fn name(&self) -> &str;
}

/// Synthetic history back-projected linearly from the current depth.
///
/// Month `i` (1-based, oldest first) is `depth - rate * (12 - i) / 12`, so
/// the newest entry equals the current depth.
pub fn linear_history(current_depth: f64, annual_rate: f64) -> Vec<f64> {
    (1..=HISTORY_MONTHS)
        .map(|i| current_depth - annual_rate * (HISTORY_MONTHS - i) as f64 / 12.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_history() {
        let history = linear_history(48.0, 12.0);
        assert_eq!(history.len(), HISTORY_MONTHS);
        assert_eq!(history[0], 37.0);
        assert_eq!(history[11], 48.0);
        assert!(history.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linear_history_recovering() {
        let history = linear_history(20.0, -6.0);
        assert_eq!(history[0], 25.5);
        assert_eq!(history[11], 20.0);
    }
}
