//! HTTP prediction client.

use async_trait::async_trait;
use salarycast_core::prediction::decode_body;
use salarycast_core::{FormInputs, PredictionError, PredictionOutcome};

use crate::config::{ClientConfig, ClientError};
use crate::transport::PredictionTransport;

/// `reqwest`-backed [`PredictionTransport`].
///
/// Single attempt, no retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl PredictionTransport for PredictionClient {
    async fn predict(&self, inputs: &FormInputs) -> PredictionOutcome {
        let url = self.config.predict_url().clone();

        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .http
            .post(url)
            .json(inputs)
            .send()
            .await
            .map_err(|e| PredictionError::transport(format!("request failed: {e}")))?;

        // The body decides the outcome; the service reports domain errors with
        // a 4xx status and an `error` field.
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "prediction endpoint returned non-success status");
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| PredictionError::transport(format!("failed to read response: {e}")))?;

        decode_body(&body)
    }
}
