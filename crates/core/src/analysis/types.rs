use serde::{Deserialize, Serialize};

use crate::fact_check::ClaimResult;

/// Value of `AnalysisResponse::status` whenever both providers returned.
pub const STATUS_SUCCESS: &str = "success";

/// Text submitted for analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Absent text is treated as empty and rejected by validation.
    #[serde(default)]
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Combined verdict for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Likelihood in [0, 1] that the text is machine-generated.
    pub ai_score: f64,
    /// Up to five fact-check hits, or one entry describing a failed lookup.
    pub claims: Vec<ClaimResult>,
    pub status: String,
}

impl AnalysisResponse {
    pub fn success(ai_score: f64, claims: Vec<ClaimResult>) -> Self {
        Self {
            ai_score,
            claims,
            status: STATUS_SUCCESS.to_string(),
        }
    }
}
