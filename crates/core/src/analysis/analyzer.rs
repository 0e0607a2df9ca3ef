use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{validate_text, AnalysisError, AnalysisRequest, AnalysisResponse, SetupError};
use crate::config::Config;
use crate::detection::{AiDetector, WinstonClient};
use crate::fact_check::{FactChecker, GoogleFactCheckClient};
use crate::metrics::ANALYSES_TOTAL;

/// Runs both providers for a text and combines their answers.
///
/// Cheap to clone; the providers are shared.
#[derive(Clone)]
pub struct Analyzer {
    detector: Arc<dyn AiDetector>,
    fact_checker: Arc<dyn FactChecker>,
}

impl Analyzer {
    pub fn new(detector: Arc<dyn AiDetector>, fact_checker: Arc<dyn FactChecker>) -> Self {
        Self {
            detector,
            fact_checker,
        }
    }

    /// Build an analyzer backed by the real provider clients.
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let detector = WinstonClient::new(&config.ai_detection)?;
        let fact_checker = GoogleFactCheckClient::new(&config.fact_check)?;

        if !config.ai_detection.has_api_key() {
            warn!("No AI detection API key configured, ai_score will always be 0");
        }
        if !config.fact_check.has_api_key() {
            warn!("No fact check API key configured, claims will report a missing key");
        }

        Ok(Self::new(Arc::new(detector), Arc::new(fact_checker)))
    }

    /// Analyze a text.
    ///
    /// Fails only when the text is too short, in which case neither provider
    /// is contacted. Provider failures are folded into the response.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        if let Err(e) = validate_text(&request.text) {
            ANALYSES_TOTAL.with_label_values(&["rejected"]).inc();
            debug!("Rejected analysis request: {:?}", e);
            return Err(e);
        }

        let text = request.text.as_str();
        let (detection, facts) = tokio::join!(
            self.detector.detect(text),
            self.fact_checker.check(text)
        );

        let degraded = detection.is_degraded() || facts.is_degraded();
        if let Some(error) = detection.error() {
            warn!("AI detection degraded: {}", error);
        }
        if let Some(error) = facts.error() {
            warn!("Fact check degraded: {}", error);
        }
        ANALYSES_TOTAL
            .with_label_values(&[if degraded { "degraded" } else { "complete" }])
            .inc();

        let response = AnalysisResponse::success(detection.into_value(), facts.into_value());
        info!(
            "Analysis finished: ai_score={:.2}, claims={}, degraded={}",
            response.ai_score,
            response.claims.len(),
            degraded
        );

        Ok(response)
    }
}
