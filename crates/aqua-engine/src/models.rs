//! Startup detection of trained model endpoints.

use std::sync::Arc;

use aqua_forecast::{RemoteSequencePredictor, SequencePredictor};
use aqua_risk::{RemoteRiskClassifier, RiskClassifier};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ModelsConfig;

/// Which trained models were reachable at startup. Fixed for the process
/// lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAvailability {
    pub predictor: bool,
    pub classifier: bool,
}

/// Trained models selected at startup.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    predictor: Option<Arc<dyn SequencePredictor>>,
    classifier: Option<Arc<dyn RiskClassifier>>,
}

impl ModelRegistry {
    /// No trained models; every request uses the fallbacks.
    pub fn fallback_only() -> Self {
        Self::default()
    }

    /// Use the given models as-is, without probing.
    pub fn with_models(
        predictor: Option<Arc<dyn SequencePredictor>>,
        classifier: Option<Arc<dyn RiskClassifier>>,
    ) -> Self {
        Self {
            predictor,
            classifier,
        }
    }

    /// Probe each configured endpoint once. Unreachable or misconfigured
    /// endpoints are dropped in favour of the fallback.
    pub async fn detect(config: &ModelsConfig) -> Self {
        let timeout = config.timeout();

        let predictor = match config.predictor_url.as_deref() {
            Some(url) => match RemoteSequencePredictor::new(url, timeout) {
                Ok(remote) => match remote.probe().await {
                    Ok(()) => {
                        info!(url, "Sequence predictor available");
                        Some(Arc::new(remote) as Arc<dyn SequencePredictor>)
                    }
                    Err(err) => {
                        info!(url, error = %err, "Sequence predictor unavailable, using seasonal fallback");
                        None
                    }
                },
                Err(err) => {
                    warn!(url, error = %err, "Invalid sequence predictor configuration");
                    None
                }
            },
            None => {
                info!("No sequence predictor configured, using seasonal fallback");
                None
            }
        };

        let classifier = match config.classifier_url.as_deref() {
            Some(url) => match RemoteRiskClassifier::new(url, timeout) {
                Ok(remote) => match remote.probe().await {
                    Ok(()) => {
                        info!(url, "Risk classifier available");
                        Some(Arc::new(remote) as Arc<dyn RiskClassifier>)
                    }
                    Err(err) => {
                        info!(url, error = %err, "Risk classifier unavailable, using rule-based fallback");
                        None
                    }
                },
                Err(err) => {
                    warn!(url, error = %err, "Invalid risk classifier configuration");
                    None
                }
            },
            None => {
                info!("No risk classifier configured, using rule-based fallback");
                None
            }
        };

        Self {
            predictor,
            classifier,
        }
    }

    pub fn availability(&self) -> ModelAvailability {
        ModelAvailability {
            predictor: self.predictor.is_some(),
            classifier: self.classifier.is_some(),
        }
    }

    pub fn predictor(&self) -> Option<Arc<dyn SequencePredictor>> {
        self.predictor.clone()
    }

    pub fn classifier(&self) -> Option<Arc<dyn RiskClassifier>> {
        self.classifier.clone()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("availability", &self.availability())
            .finish()
    }
}
