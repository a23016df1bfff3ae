//! # AquaSentinel Forecast
//!
//! Projects a region's water-table depth six months ahead with a widening
//! confidence band, and reconstructs the preceding twelve months.
//!
//! ## Models
//!
//! - A trained [`SequencePredictor`] (e.g. [`RemoteSequencePredictor`]) when
//!   one was detected at startup.
//! - The closed-form [`SeasonalModel`] otherwise. It superimposes a yearly
//!   sinusoid and bounded jitter on the linear depletion trend. It is a
//!   numerical approximation, not a statistical model, and says so in its
//!   reported model name.
//!
//! A predictor that fails mid-flight is replaced by the seasonal model for
//! that request; [`ForecastEngine::forecast`] itself never fails.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aqua_forecast::{ForecastEngine, SeasonalModel};
//! use aqua_types::RegionProfile;
//!
//! # async fn example() {
//! let engine = ForecastEngine::seasonal_only(SeasonalModel::seeded(7));
//! let region = RegionProfile::new("Rajasthan", 48.0, 8.1);
//!
//! let result = engine.forecast(&region).await;
//! assert_eq!(result.forecast.len(), 6);
//! assert_eq!(result.months_to_crisis, Some(3));
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod crisis;
mod engine;
mod error;
mod predictor;
mod remote;
mod seasonal;

pub use crisis::{months_to_crisis, will_reach_critical, CRISIS_DEPTH_M};
pub use engine::{ForecastEngine, DEFAULT_FORECAST_STEPS, MODEL_CONFIDENCE};
pub use error::{PredictorError, PredictorResult};
pub use predictor::{linear_history, SequencePredictor, HISTORY_MONTHS};
pub use remote::{RemoteSequencePredictor, DEFAULT_REMOTE_PREDICTOR_NAME};
pub use seasonal::{SeasonalModel, SEASONAL_MODEL_NAME};
