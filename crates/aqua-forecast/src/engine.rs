//! Forecast engine.

use std::sync::Arc;

use aqua_types::{round_to, ForecastPoint, ForecastResult, RegionProfile};
use tracing::{debug, instrument, warn};

use crate::crisis::{months_to_crisis, will_reach_critical};
use crate::error::{PredictorError, PredictorResult};
use crate::predictor::{linear_history, SequencePredictor};
use crate::seasonal::{SeasonalModel, BAND_STEP_M};

/// Months projected when the caller does not say otherwise.
pub const DEFAULT_FORECAST_STEPS: usize = 6;

/// Reported confidence. Neither model exposes a calibrated value, so this
/// is a fixed approximation.
pub const MODEL_CONFIDENCE: f64 = 0.87;

/// Produces depth forecasts from a trained predictor or the seasonal model.
///
/// The predictor choice is fixed at construction. The engine holds no
/// mutable state besides the seasonal model's jitter source and is shared
/// across requests behind an `Arc`.
pub struct ForecastEngine {
    predictor: Option<Arc<dyn SequencePredictor>>,
    seasonal: SeasonalModel,
}

impl ForecastEngine {
    /// Engine using `predictor` when present, the seasonal model otherwise.
    pub fn new(predictor: Option<Arc<dyn SequencePredictor>>, seasonal: SeasonalModel) -> Self {
        Self {
            predictor,
            seasonal,
        }
    }

    /// Engine backed by a trained predictor.
    pub fn with_predictor(
        predictor: Arc<dyn SequencePredictor>,
        seasonal: SeasonalModel,
    ) -> Self {
        Self::new(Some(predictor), seasonal)
    }

    /// Engine that only runs the seasonal model.
    pub fn seasonal_only(seasonal: SeasonalModel) -> Self {
        Self::new(None, seasonal)
    }

    /// Whether a trained predictor is wired in.
    pub fn uses_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Name of the model requests are routed to first.
    pub fn model_name(&self) -> &str {
        match &self.predictor {
            Some(predictor) => predictor.name(),
            None => self.seasonal.name(),
        }
    }

    /// Six-month forecast for `region`.
    pub async fn forecast(&self, region: &RegionProfile) -> ForecastResult {
        self.forecast_steps(region, DEFAULT_FORECAST_STEPS).await
    }

    /// `steps`-month forecast for `region`. Never fails.
    #[instrument(skip(self, region), fields(region = %region.name))]
    pub async fn forecast_steps(&self, region: &RegionProfile, steps: usize) -> ForecastResult {
        let depth = region.current_depth_m;
        let rate = region.annual_depletion_m_per_year;

        let (model_name, historical, forecast) = match &self.predictor {
            Some(predictor) => match self.predict(predictor.as_ref(), depth, rate, steps).await {
                Ok((historical, forecast)) => (predictor.name().to_string(), historical, forecast),
                Err(err) => {
                    warn!(
                        model = predictor.name(),
                        error = %err,
                        "Sequence predictor failed, serving seasonal fallback"
                    );
                    let (historical, forecast) = self.seasonal.project(depth, rate, steps);
                    (self.seasonal.name().to_string(), historical, forecast)
                }
            },
            None => {
                let (historical, forecast) = self.seasonal.project(depth, rate, steps);
                (self.seasonal.name().to_string(), historical, forecast)
            }
        };

        debug!(model = %model_name, steps, "Forecast computed");

        ForecastResult {
            region: region.name.clone(),
            current_depth: round_to(depth, 2),
            annual_rate: round_to(rate, 2),
            model_name,
            confidence: MODEL_CONFIDENCE,
            historical,
            forecast,
            will_reach_critical: will_reach_critical(depth, rate),
            months_to_crisis: months_to_crisis(depth, rate),
        }
    }

    async fn predict(
        &self,
        predictor: &dyn SequencePredictor,
        depth: f64,
        rate: f64,
        steps: usize,
    ) -> PredictorResult<(Vec<f64>, Vec<ForecastPoint>)> {
        let history = linear_history(depth, rate);
        let values = predictor.predict(&history, steps).await?;

        if values.len() != steps {
            return Err(PredictorError::UnexpectedOutput {
                expected: steps,
                actual: values.len(),
            });
        }
        if let Some(step) = values.iter().position(|v| !v.is_finite()) {
            return Err(PredictorError::NonFinite { step });
        }

        let forecast = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let band = BAND_STEP_M * (i + 1) as f64;
                ForecastPoint {
                    month: (i + 1) as u32,
                    predicted_depth: round_to(value, 2),
                    lower_bound: round_to(value - band, 2),
                    upper_bound: round_to(value + band, 2),
                }
            })
            .collect();

        let historical = history.into_iter().map(|v| round_to(v, 2)).collect();
        Ok((historical, forecast))
    }
}

impl std::fmt::Debug for ForecastEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastEngine")
            .field("model", &self.model_name())
            .finish()
    }
}
