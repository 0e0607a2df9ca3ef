//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the provider traits,
//! allowing the analysis flow and HTTP surface to be tested without
//! contacting the real services.
//!
//! # Example
//!
//! ```rust,ignore
//! use aegis_core::testing::{fixtures, MockAiDetector, MockFactChecker};
//!
//! let detector = MockAiDetector::new();
//! let fact_checker = MockFactChecker::new();
//!
//! detector.set_outcome(ProviderOutcome::Success(0.8)).await;
//! fact_checker
//!     .set_outcome(ProviderOutcome::Success(vec![fixtures::flat_earth_claim()]))
//!     .await;
//!
//! let analyzer = Analyzer::new(Arc::new(detector), Arc::new(fact_checker));
//! ```

mod mock_detector;
mod mock_fact_checker;

pub use mock_detector::MockAiDetector;
pub use mock_fact_checker::MockFactChecker;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::fact_check::ClaimResult;

    /// Text long enough to pass validation.
    pub const SAMPLE_TEXT: &str = "This is a long enough test string.";

    /// The mapped form of `fact_check_response_body()`.
    pub fn flat_earth_claim() -> ClaimResult {
        ClaimResult::new("The earth is flat.", "False", "NASA")
    }

    /// Winston response body for a text judged 20% human.
    pub fn detection_response_body() -> Value {
        json!({ "score": 20 })
    }

    /// Fact Check Tools response body with a single reviewed claim.
    pub fn fact_check_response_body() -> Value {
        json!({
            "claims": [
                {
                    "text": "The earth is flat.",
                    "claimReview": [
                        { "textualRating": "False", "publisher": { "name": "NASA" } }
                    ]
                }
            ]
        })
    }

    /// Fact Check Tools response body with `count` unreviewed claims.
    pub fn numbered_claims_body(count: usize) -> Value {
        let claims: Vec<Value> = (1..=count)
            .map(|i| json!({ "text": format!("claim {}", i) }))
            .collect();
        json!({ "claims": claims })
    }
}
