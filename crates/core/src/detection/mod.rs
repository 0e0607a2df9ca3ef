//! AI-generated text detection.
//!
//! The provider reports how likely a text is to be human-written on a
//! 0..100 scale. Callers get the inverse as a fraction in [0, 1].

mod winston;

pub use winston::WinstonClient;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::outcome::ProviderOutcome;

/// Human score assumed when the provider omits it.
pub const DEFAULT_HUMAN_SCORE: f64 = 100.0;

/// Score reported when detection could not be performed.
pub const FALLBACK_AI_SCORE: f64 = 0.0;

/// Errors that can occur when calling the detection provider.
///
/// The display strings are what ends up in a degraded outcome.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// No credential configured; no request was made.
    #[error("API Key missing")]
    MissingApiKey,

    /// Provider answered with something other than 200.
    #[error("Winston AI Error: {0}")]
    ApiError(u16),

    /// Transport failure or timeout, stripped of its URL.
    #[error("{0}")]
    Http(reqwest::Error),

    /// Response body could not be read as the expected JSON.
    #[error("{0}")]
    Parse(String),
}

impl From<reqwest::Error> for DetectionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Detects machine-generated text.
#[async_trait]
pub trait AiDetector: Send + Sync {
    /// Estimate the AI likelihood of `text`.
    ///
    /// Never fails: provider problems yield a degraded outcome with score 0.
    async fn detect(&self, text: &str) -> ProviderOutcome<f64>;
}

/// Convert a human-probability score (0..100) into an AI likelihood (0..1).
pub fn ai_likelihood_from_human_score(human_score: Option<f64>) -> f64 {
    let human = human_score.unwrap_or(DEFAULT_HUMAN_SCORE);
    let likelihood = (100.0 - human) / 100.0;
    if !(0.0..=1.0).contains(&likelihood) {
        warn!(
            "Detection provider returned human score {} outside 0..100, clamping",
            human
        );
        return likelihood.clamp(0.0, 1.0);
    }
    likelihood
}
