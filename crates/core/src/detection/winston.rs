//! Winston AI content detection client.
//!
//! Winston authenticates with a bearer token and reports a human-probability
//! `score` between 0 and 100.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ai_likelihood_from_human_score, AiDetector, DetectionError, FALLBACK_AI_SCORE};
use crate::config::AiDetectionConfig;
use crate::metrics::record_external_call;
use crate::outcome::ProviderOutcome;

const SERVICE: &str = "winston";

/// Winston AI client.
pub struct WinstonClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WinstonClient {
    /// Create a new Winston client.
    ///
    /// A missing API key is accepted; every detection then degrades without
    /// touching the network.
    pub fn new(config: &AiDetectionConfig) -> Result<Self, DetectionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = config
            .has_api_key()
            .then(|| config.api_key.trim().to_string());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Request detection and return the AI likelihood.
    pub async fn request_score(&self, text: &str) -> Result<f64, DetectionError> {
        let Some(api_key) = &self.api_key else {
            return Err(DetectionError::MissingApiKey);
        };

        let url = format!("{}/ai-content-detection", self.base_url);
        debug!("Winston detection request: {} chars", text.chars().count());

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&WinstonRequest {
                text,
                sentences: true,
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DetectionError::ApiError(status.as_u16()));
        }

        let body: WinstonResponse = response
            .json()
            .await
            .map_err(|e| DetectionError::Parse(e.without_url().to_string()))?;

        Ok(ai_likelihood_from_human_score(body.score))
    }
}

#[async_trait]
impl AiDetector for WinstonClient {
    async fn detect(&self, text: &str) -> ProviderOutcome<f64> {
        let started = Instant::now();
        match self.request_score(text).await {
            Ok(score) => {
                record_external_call(SERVICE, "success", Some(started.elapsed().as_secs_f64()));
                ProviderOutcome::Success(score)
            }
            Err(DetectionError::MissingApiKey) => {
                record_external_call(SERVICE, "not_configured", None);
                ProviderOutcome::degraded(
                    DetectionError::MissingApiKey.to_string(),
                    FALLBACK_AI_SCORE,
                )
            }
            Err(e) => {
                record_external_call(SERVICE, "error", Some(started.elapsed().as_secs_f64()));
                warn!("Winston detection failed: {}", e);
                ProviderOutcome::degraded(e.to_string(), FALLBACK_AI_SCORE)
            }
        }
    }
}

// ============================================================================
// Winston API Types (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct WinstonRequest<'a> {
    text: &'a str,
    /// Sentence-level breakdown; requested but not used downstream.
    sentences: bool,
}

#[derive(Debug, Deserialize)]
struct WinstonResponse {
    #[serde(default)]
    score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(WinstonRequest {
            text: "hello world",
            sentences: true,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"text": "hello world", "sentences": true})
        );
    }

    #[test]
    fn test_response_score_optional() {
        let body: WinstonResponse = serde_json::from_str(r#"{"score": 20}"#).unwrap();
        assert_eq!(body.score, Some(20.0));

        let body: WinstonResponse =
            serde_json::from_str(r#"{"status": 200, "credits_used": 10}"#).unwrap();
        assert_eq!(body.score, None);

        let body: WinstonResponse = serde_json::from_str(r#"{"score": null}"#).unwrap();
        assert_eq!(body.score, None);
    }

    #[tokio::test]
    async fn test_missing_key_degrades_without_request() {
        let config = AiDetectionConfig {
            // Unroutable; a request would fail with a transport error instead
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let client = WinstonClient::new(&config).unwrap();

        let outcome = client.detect("Some text long enough").await;
        assert_eq!(outcome, ProviderOutcome::degraded("API Key missing", 0.0));
    }
}
