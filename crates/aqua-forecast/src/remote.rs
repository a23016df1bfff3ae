//! HTTP client for a model-serving endpoint hosting the trained LSTM.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PredictorError, PredictorResult};
use crate::predictor::SequencePredictor;

/// Name reported for forecasts produced by the remote model.
pub const DEFAULT_REMOTE_PREDICTOR_NAME: &str = "LSTM Neural Network";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    history: &'a [f64],
    steps: usize,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<f64>,
}

/// Sequence predictor served over HTTP.
///
/// Protocol: `GET {base}/health` for availability, `POST {base}/predict`
/// with `{"history": [...], "steps": n}` answering `{"predictions": [...]}`.
#[derive(Debug, Clone)]
pub struct RemoteSequencePredictor {
    client: reqwest::Client,
    base_url: String,
    name: String,
}

impl RemoteSequencePredictor {
    /// Build a client with a bounded per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> PredictorResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PredictorError::InvalidConfig(
                "predictor url is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            name: DEFAULT_REMOTE_PREDICTOR_NAME.to_string(),
        })
    }

    /// Override the reported model name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check once whether the endpoint is serving.
    pub async fn probe(&self) -> PredictorResult<()> {
        let url = format!("{}/health", self.base_url);
        self.client.get(&url).send().await?.error_for_status()?;
        debug!(url = %url, "Sequence predictor is reachable");
        Ok(())
    }
}

#[async_trait]
impl SequencePredictor for RemoteSequencePredictor {
    async fn predict(&self, history: &[f64], steps: usize) -> PredictorResult<Vec<f64>> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { history, steps })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::Failed {
                model: self.name.clone(),
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let payload: PredictResponse = response.json().await?;
        Ok(payload.predictions)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_url() {
        let result = RemoteSequencePredictor::new("", Duration::from_secs(1));
        assert!(matches!(result, Err(PredictorError::InvalidConfig(_))));
    }

    #[test]
    fn test_normalises_base_url() {
        let predictor =
            RemoteSequencePredictor::new("http://models.local:9000/", Duration::from_secs(1))
                .unwrap()
                .with_name("LSTM v2");
        assert_eq!(predictor.base_url(), "http://models.local:9000");
        assert_eq!(predictor.name(), "LSTM v2");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let predictor =
            RemoteSequencePredictor::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        assert!(predictor.probe().await.is_err());
        assert!(predictor.predict(&[1.0; 12], 6).await.is_err());
    }
}
