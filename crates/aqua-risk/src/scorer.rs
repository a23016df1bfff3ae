//! Blended contamination risk score.

use std::sync::Arc;

use aqua_types::{round_to, RiskLevel, RiskScoreResult};
use tracing::{debug, instrument, warn};

use crate::classifier::{RiskClassifier, RuleBasedClassifier};
use crate::features::RiskFeatures;

const BASE_WEIGHT: f64 = 0.7;
const CONFIDENCE_WEIGHT: f64 = 30.0;

/// Base score for a risk label.
pub fn base_score(label: RiskLevel) -> f64 {
    match label {
        RiskLevel::Low => 20.0,
        RiskLevel::Moderate => 45.0,
        RiskLevel::High => 72.0,
        RiskLevel::Critical => 90.0,
    }
}

/// `base[label]·0.7 + max(probabilities)·30`, clamped to `[0, 100]` and
/// rounded to 1 decimal.
///
/// The maximum is taken over the whole vector even when it sits on a class
/// other than `label`. NaN entries are skipped.
pub fn blend_score(label: RiskLevel, probabilities: &[f64; 4]) -> f64 {
    let confidence = probabilities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let raw = base_score(label) * BASE_WEIGHT + confidence * CONFIDENCE_WEIGHT;
    round_to(raw.clamp(0.0, 100.0), 1)
}

/// Scores regions through a classifier, falling back to the rule-based
/// classifier whenever the primary one fails.
pub struct RiskScorer {
    classifier: Arc<dyn RiskClassifier>,
    fallback: RuleBasedClassifier,
}

impl RiskScorer {
    pub fn new(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self {
            classifier,
            fallback: RuleBasedClassifier::new(),
        }
    }

    /// Scorer with no trained model.
    pub fn rule_based() -> Self {
        Self::new(Arc::new(RuleBasedClassifier::new()))
    }

    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    /// Score one region. Never fails.
    #[instrument(skip(self, features))]
    pub async fn score_contamination(
        &self,
        region: &str,
        features: &RiskFeatures,
    ) -> RiskScoreResult {
        let outcome = self
            .classifier
            .classify(features)
            .await
            .and_then(|c| c.validate());

        let (classification, model) = match outcome {
            Ok(classification) => (classification, self.classifier.name()),
            Err(err) => {
                warn!(
                    model = self.classifier.name(),
                    error = %err,
                    "Risk classifier failed, serving rule-based fallback"
                );
                (self.fallback.evaluate(features), self.fallback.name())
            }
        };

        let score = blend_score(classification.label, &classification.probabilities);
        debug!(model, label = %classification.label, score, "Risk scored");

        RiskScoreResult {
            region: region.to_string(),
            score,
            label: classification.label,
            source_model_name: model.to_string(),
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::rule_based()
    }
}

impl std::fmt::Debug for RiskScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskScorer")
            .field("model", &self.model_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classification, RULE_BASED_MODEL_NAME};
    use crate::error::{ClassifierError, ClassifierResult};
    use async_trait::async_trait;

    struct FixedClassifier(Classification);

    #[async_trait]
    impl RiskClassifier for FixedClassifier {
        async fn classify(&self, _features: &RiskFeatures) -> ClassifierResult<Classification> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct DownClassifier;

    #[async_trait]
    impl RiskClassifier for DownClassifier {
        async fn classify(&self, _features: &RiskFeatures) -> ClassifierResult<Classification> {
            Err(ClassifierError::Transport("timed out".to_string()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    #[test]
    fn test_blend_formula() {
        // 72·0.7 + 0.8·30 = 74.4
        assert_eq!(blend_score(RiskLevel::High, &[0.05, 0.1, 0.8, 0.05]), 74.4);
        // 90·0.7 + 30 = 93
        assert_eq!(blend_score(RiskLevel::Critical, &[0.0, 0.0, 0.0, 1.0]), 93.0);
        // 20·0.7 + 0.25·30 = 21.5
        assert_eq!(blend_score(RiskLevel::Low, &[0.25; 4]), 21.5);
    }

    #[test]
    fn test_max_taken_across_classes() {
        // Label low, but the largest probability sits on critical.
        assert_eq!(blend_score(RiskLevel::Low, &[0.1, 0.1, 0.1, 0.7]), 35.0);
    }

    #[test]
    fn test_blend_is_clamped() {
        assert_eq!(blend_score(RiskLevel::Critical, &[0.0, 0.0, 0.0, 5.0]), 100.0);
        assert_eq!(blend_score(RiskLevel::Low, &[-3.0; 4]), 0.0);
    }

    #[tokio::test]
    async fn test_scores_with_primary_classifier() {
        let scorer = RiskScorer::new(Arc::new(FixedClassifier(Classification {
            label: RiskLevel::High,
            probabilities: [0.05, 0.1, 0.8, 0.05],
        })));

        let result = scorer
            .score_contamination("Punjab", &RiskFeatures::default())
            .await;
        assert_eq!(result.region, "Punjab");
        assert_eq!(result.label, RiskLevel::High);
        assert_eq!(result.score, 74.4);
        assert_eq!(result.source_model_name, "fixed");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_rules() {
        let scorer = RiskScorer::new(Arc::new(DownClassifier));
        let result = scorer
            .score_contamination("Unknown", &RiskFeatures::default())
            .await;

        // Defaults band to moderate: 45·0.7 + 30 = 61.5
        assert_eq!(result.label, RiskLevel::Moderate);
        assert_eq!(result.score, 61.5);
        assert_eq!(result.source_model_name, RULE_BASED_MODEL_NAME);
    }

    #[tokio::test]
    async fn test_malformed_vector_falls_back() {
        let scorer = RiskScorer::new(Arc::new(FixedClassifier(Classification {
            label: RiskLevel::Critical,
            probabilities: [f64::INFINITY, 0.0, 0.0, 0.0],
        })));
        let result = scorer
            .score_contamination("Odd", &RiskFeatures::default())
            .await;
        assert_eq!(result.source_model_name, RULE_BASED_MODEL_NAME);
    }
}
