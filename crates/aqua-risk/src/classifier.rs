//! Contamination classifiers.

use aqua_types::RiskLevel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, ClassifierResult};
use crate::features::RiskFeatures;

/// Model name reported for scores from the rule-based classifier.
pub const RULE_BASED_MODEL_NAME: &str = "Rule-based contamination index (no trained model)";

/// Discrete label plus one probability per [`RiskLevel`], in level order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: RiskLevel,
    pub probabilities: [f64; 4],
}

impl Classification {
    /// Classification that is certain of `label`.
    pub fn certain(label: RiskLevel) -> Self {
        let mut probabilities = [0.0; 4];
        probabilities[label.index()] = 1.0;
        Self {
            label,
            probabilities,
        }
    }

    /// Reject vectors that cannot feed the blended score.
    pub fn validate(self) -> ClassifierResult<Self> {
        if let Some(i) = self.probabilities.iter().position(|p| !p.is_finite()) {
            return Err(ClassifierError::MalformedOutput(format!(
                "probability for class {} is not finite",
                i
            )));
        }
        Ok(self)
    }
}

/// A classifier mapping region features to a risk label.
///
/// Implementations are shared across requests and must be `Send + Sync`.
#[async_trait]
pub trait RiskClassifier: Send + Sync {
    /// Classify one feature vector.
    async fn classify(&self, features: &RiskFeatures) -> ClassifierResult<Classification>;

    /// Name reported alongside scores produced by this classifier.
    fn name(&self) -> &str;
}

/// Deterministic classifier over a weighted contamination index.
///
/// `index = depth·0.30 + extraction·5 + fluoride·8 + arsenic·60`, banded at
/// 55 / 32 / 16.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Weighted contamination index for `features`.
    pub fn index(features: &RiskFeatures) -> f64 {
        features.depth_m * 0.30
            + features.extraction_rate * 5.0
            + features.fluoride_hist * 8.0
            + features.arsenic_hist * 60.0
    }

    /// Band an index into a risk level.
    pub fn label_for(index: f64) -> RiskLevel {
        if index > 55.0 {
            RiskLevel::Critical
        } else if index > 32.0 {
            RiskLevel::High
        } else if index > 16.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Infallible classification.
    pub fn evaluate(&self, features: &RiskFeatures) -> Classification {
        Classification::certain(Self::label_for(Self::index(features)))
    }
}

#[async_trait]
impl RiskClassifier for RuleBasedClassifier {
    async fn classify(&self, features: &RiskFeatures) -> ClassifierResult<Classification> {
        Ok(self.evaluate(features))
    }

    fn name(&self) -> &str {
        RULE_BASED_MODEL_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(depth: f64, extraction: f64, fluoride: f64, arsenic: f64) -> RiskFeatures {
        RiskFeatures {
            depth_m: depth,
            extraction_rate: extraction,
            fluoride_hist: fluoride,
            arsenic_hist: arsenic,
            ..RiskFeatures::default()
        }
    }

    #[test]
    fn test_certain_vector() {
        let c = Classification::certain(RiskLevel::High);
        assert_eq!(c.probabilities, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let c = Classification {
            label: RiskLevel::Low,
            probabilities: [0.1, f64::NAN, 0.2, 0.3],
        };
        assert!(matches!(c.validate(), Err(ClassifierError::MalformedOutput(_))));
    }

    #[test]
    fn test_index_bands() {
        // 48·0.3 + 8.1·5 + 4.2·8 + 0.01·60 = 89.1
        let rajasthan = features(48.0, 8.1, 4.2, 0.01);
        assert_eq!(
            RuleBasedClassifier::label_for(RuleBasedClassifier::index(&rajasthan)),
            RiskLevel::Critical
        );

        assert_eq!(RuleBasedClassifier::label_for(55.0), RiskLevel::High);
        assert_eq!(RuleBasedClassifier::label_for(32.0), RiskLevel::Moderate);
        assert_eq!(RuleBasedClassifier::label_for(16.0), RiskLevel::Low);
        assert_eq!(RuleBasedClassifier::label_for(16.5), RiskLevel::Moderate);
    }

    #[test]
    fn test_defaults_classify_moderate() {
        // 20·0.3 + 3·5 + 0.5·8 + 0.01·60 = 25.6
        let c = RuleBasedClassifier.evaluate(&RiskFeatures::default());
        assert_eq!(c.label, RiskLevel::Moderate);
    }

    #[tokio::test]
    async fn test_trait_path() {
        let classifier = RuleBasedClassifier::new();
        let c = classifier.classify(&features(5.0, 0.5, 0.2, 0.0)).await.unwrap();
        assert_eq!(c.label, RiskLevel::Low);
        assert_eq!(classifier.name(), RULE_BASED_MODEL_NAME);
    }
}
