//! Scoring endpoint client implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use scorebridge_core::config::ScoringConfig;
use scorebridge_core::error::NO_RESPONSE_BODY;
use scorebridge_core::{Error, Result};

use crate::payload::ScoreRequest;
use crate::provider::ScoringProvider;

/// Routing header selecting a model deployment slot behind the endpoint URL.
pub const DEPLOYMENT_HEADER: &str = "azureml-model-deployment";

/// Default outbound request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Scoring provider backed by a hosted model endpoint over HTTPS.
///
/// Holds read-only configuration and a `reqwest::Client`; safe to share and
/// invoke concurrently. Configuration is validated on every call, before
/// any network activity, so a misconfigured process fails individual
/// invocations rather than crashing the host.
pub struct EndpointClient {
    config: ScoringConfig,
    client: reqwest::Client,
    timeout: Duration,
}

impl EndpointClient {
    /// Creates a new endpoint client.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check required configuration; runs before any I/O.
    fn validate_config(&self) -> Result<()> {
        if self.config.url.is_empty() {
            return Err(Error::config("missing scoring URL"));
        }
        if self.config.api_key.is_empty() {
            return Err(Error::config("missing API key"));
        }
        Ok(())
    }

    /// Interpret a 2xx response body as a one-element prediction array.
    fn parse_prediction(body: &str) -> Result<f64> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|_| Error::response_format("body is not valid JSON", body))?;

        let items = value
            .as_array()
            .ok_or_else(|| Error::response_format("expected a JSON array", body))?;

        let first = items
            .first()
            .ok_or_else(|| Error::response_format("prediction array is empty", body))?;

        first
            .as_f64()
            .ok_or_else(|| Error::response_format("prediction is not numeric", body))
    }
}

#[async_trait]
impl ScoringProvider for EndpointClient {
    async fn invoke(&self, distributor_id: f64, delivery_date: &str) -> Result<f64> {
        self.validate_config()?;

        let payload = ScoreRequest::single_row(distributor_id, delivery_date);

        let mut request = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key),
            )
            .timeout(self.timeout)
            .json(&payload);

        // Route to a specific deployment slot when one is configured.
        if !self.config.deployment.is_empty() {
            request = request.header(DEPLOYMENT_HEADER, &self.config.deployment);
        }

        debug!(url = %self.config.url, distributor_id, delivery_date, "invoking scoring endpoint");

        // Single attempt, no retry.
        let response = request
            .send()
            .await
            .map_err(|e| Error::transport("failed to reach scoring endpoint", e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| NO_RESPONSE_BODY.to_string());
            return Err(Error::upstream(status.as_u16(), reason, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport("failed to read scoring response", e))?;

        Self::parse_prediction(&body)
    }
}

// ============================================================================
// Tests
// ============================================================================
