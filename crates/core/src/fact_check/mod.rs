//! Fact-check claim search.
//!
//! The first part of the submitted text is sent as a search query and the
//! provider's claim reviews are flattened into `ClaimResult`s.

mod google;
mod types;

pub use google::GoogleFactCheckClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::outcome::ProviderOutcome;

/// Longest query the provider is sent, in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Most claims reported per analysis.
pub const MAX_CLAIMS: usize = 5;

/// Errors that can occur when calling the fact-check provider.
///
/// The display strings become the `claim` text of the placeholder entry.
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// No credential configured; no request was made.
    #[error("API Key missing")]
    MissingApiKey,

    /// Provider answered with something other than 200.
    #[error("Google API Error: {0}")]
    ApiError(u16),

    /// Transport failure or timeout. Holds the error without its URL, which
    /// carries the API key.
    #[error("Connection Error: {0}")]
    Http(reqwest::Error),

    /// Response body could not be read as the expected JSON.
    #[error("Connection Error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FactCheckError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Looks up published fact checks related to a text.
#[async_trait]
pub trait FactChecker: Send + Sync {
    /// Search for claims related to `text`.
    ///
    /// Never fails: provider problems yield a degraded outcome holding a
    /// single entry that describes the problem.
    async fn check(&self, text: &str) -> ProviderOutcome<Vec<ClaimResult>>;
}

/// Leading `MAX_QUERY_CHARS` characters of `text`.
pub fn search_query(text: &str) -> &str {
    match text.char_indices().nth(MAX_QUERY_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
