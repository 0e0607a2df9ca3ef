use serde::{Deserialize, Serialize};

use super::FactCheckError;

/// Placeholder when a claim has no text.
pub const NO_CLAIM_TEXT: &str = "N/A";
/// Rating when a review exists but carries no textual rating.
pub const UNKNOWN_RATING: &str = "Unknown";
/// Rating when a claim has no reviews at all.
pub const NO_RATING: &str = "No Rating";
/// Source when the publisher is not known.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";
/// Rating of the entry that stands in for a failed lookup.
pub const ERROR_RATING: &str = "Error";
/// Rating of the entry that stands in for a missing credential.
pub const NOT_APPLICABLE_RATING: &str = "N/A";

/// A fact-checked claim with its verdict and publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    pub claim: String,
    pub rating: String,
    pub source: String,
}

impl ClaimResult {
    pub fn new(
        claim: impl Into<String>,
        rating: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            claim: claim.into(),
            rating: rating.into(),
            source: source.into(),
        }
    }

    /// Entry describing why the lookup produced no real claims.
    pub fn from_error(error: &FactCheckError) -> Self {
        let rating = match error {
            FactCheckError::MissingApiKey => NOT_APPLICABLE_RATING,
            _ => ERROR_RATING,
        };
        Self::new(error.to_string(), rating, UNKNOWN_SOURCE)
    }
}
