//! Google Fact Check Tools claim search client.
//!
//! The API key travels as the `key` query parameter. Responses are parsed
//! permissively: every field may be absent or null.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::types::{ClaimResult, NO_CLAIM_TEXT, NO_RATING, UNKNOWN_RATING, UNKNOWN_SOURCE};
use super::{search_query, FactCheckError, FactChecker, MAX_CLAIMS};
use crate::config::FactCheckConfig;
use crate::metrics::record_external_call;
use crate::outcome::ProviderOutcome;

const SERVICE: &str = "google_fact_check";

/// Google Fact Check Tools client.
pub struct GoogleFactCheckClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleFactCheckClient {
    /// Create a new fact-check client.
    ///
    /// A missing API key is accepted; every lookup then degrades without
    /// touching the network.
    pub fn new(config: &FactCheckConfig) -> Result<Self, FactCheckError> {
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

    /// Search claims for the leading part of `text`.
    pub async fn search_claims(&self, text: &str) -> Result<Vec<ClaimResult>, FactCheckError> {
        let Some(api_key) = &self.api_key else {
            return Err(FactCheckError::MissingApiKey);
        };

        let url = format!("{}/claims:search", self.base_url);
        let query = search_query(text);
        debug!("Fact check search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FactCheckError::ApiError(status.as_u16()));
        }

        let body: ClaimSearchResponse = response
            .json()
            .await
            .map_err(|e| FactCheckError::Parse(e.without_url().to_string()))?;

        Ok(body.into_claims())
    }
}

#[async_trait]
impl FactChecker for GoogleFactCheckClient {
    async fn check(&self, text: &str) -> ProviderOutcome<Vec<ClaimResult>> {
        let started = Instant::now();
        match self.search_claims(text).await {
            Ok(claims) => {
                record_external_call(SERVICE, "success", Some(started.elapsed().as_secs_f64()));
                debug!("Fact check returned {} claims", claims.len());
                ProviderOutcome::Success(claims)
            }
            Err(e) => {
                if matches!(e, FactCheckError::MissingApiKey) {
                    record_external_call(SERVICE, "not_configured", None);
                } else {
                    record_external_call(SERVICE, "error", Some(started.elapsed().as_secs_f64()));
                    warn!("Fact check failed: {}", e);
                }
                ProviderOutcome::degraded(e.to_string(), vec![ClaimResult::from_error(&e)])
            }
        }
    }
}

// ============================================================================
// Fact Check Tools API Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Option<Vec<ApiClaim>>,
}

impl ClaimSearchResponse {
    /// Leading `MAX_CLAIMS` claims in provider order.
    fn into_claims(self) -> Vec<ClaimResult> {
        self.claims
            .unwrap_or_default()
            .into_iter()
            .take(MAX_CLAIMS)
            .map(ClaimResult::from)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ApiClaim {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "claimReview", default)]
    claim_review: Option<Vec<ApiClaimReview>>,
}

#[derive(Debug, Deserialize)]
struct ApiClaimReview {
    #[serde(rename = "textualRating", default)]
    textual_rating: Option<String>,
    #[serde(default)]
    publisher: Option<ApiPublisher>,
}

#[derive(Debug, Deserialize)]
struct ApiPublisher {
    #[serde(default)]
    name: Option<String>,
}

impl From<ApiClaim> for ClaimResult {
    fn from(api: ApiClaim) -> Self {
        let claim = api.text.unwrap_or_else(|| NO_CLAIM_TEXT.to_string());

        // Only the first review is reported
        match api.claim_review.unwrap_or_default().into_iter().next() {
            Some(review) => ClaimResult {
                claim,
                rating: review
                    .textual_rating
                    .unwrap_or_else(|| UNKNOWN_RATING.to_string()),
                source: review
                    .publisher
                    .and_then(|p| p.name)
                    .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            },
            None => ClaimResult::new(claim, NO_RATING, UNKNOWN_SOURCE),
        }
    }
}
