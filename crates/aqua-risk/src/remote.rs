//! HTTP client for a model-serving endpoint hosting the trained classifier.

use std::time::Duration;

use aqua_types::RiskLevel;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::classifier::{Classification, RiskClassifier};
use crate::error::{ClassifierError, ClassifierResult};
use crate::features::RiskFeatures;

/// Name reported for scores produced by the remote classifier.
pub const DEFAULT_REMOTE_CLASSIFIER_NAME: &str = "XGBoost Classifier";

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: RiskLevel,
    probabilities: Vec<f64>,
}

/// Risk classifier served over HTTP.
///
/// Protocol: `GET {base}/health` for availability, `POST {base}/classify`
/// with the feature object answering `{"label": "high", "probabilities": [..4]}`.
#[derive(Debug, Clone)]
pub struct RemoteRiskClassifier {
    client: reqwest::Client,
    base_url: String,
    name: String,
}

impl RemoteRiskClassifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClassifierResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClassifierError::InvalidConfig(
                "classifier url is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            name: DEFAULT_REMOTE_CLASSIFIER_NAME.to_string(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check once whether the endpoint is serving.
    pub async fn probe(&self) -> ClassifierResult<()> {
        let url = format!("{}/health", self.base_url);
        self.client.get(&url).send().await?.error_for_status()?;
        debug!(url = %url, "Risk classifier is reachable");
        Ok(())
    }
}

#[async_trait]
impl RiskClassifier for RemoteRiskClassifier {
    async fn classify(&self, features: &RiskFeatures) -> ClassifierResult<Classification> {
        let url = format!("{}/classify", self.base_url);
        let response = self.client.post(&url).json(features).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Failed {
                model: self.name.clone(),
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let payload: ClassifyResponse = response.json().await?;
        let probabilities: [f64; 4] = payload.probabilities.try_into().map_err(|v: Vec<f64>| {
            ClassifierError::MalformedOutput(format!("expected 4 probabilities, got {}", v.len()))
        })?;

        Ok(Classification {
            label: payload.label,
            probabilities,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
