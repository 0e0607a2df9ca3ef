//! Mock AI detector for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::detection::AiDetector;
use crate::outcome::ProviderOutcome;

/// Mock implementation of the AiDetector trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable outcome (success or degraded)
/// - Record every text it was asked to analyze
/// - Simulate slow providers
///
/// # Example
///
/// ```rust,ignore
/// use aegis_core::testing::MockAiDetector;
///
/// let detector = MockAiDetector::new();
/// detector.set_outcome(ProviderOutcome::Success(0.8)).await;
///
/// let outcome = detector.detect("some text").await;
/// assert_eq!(*outcome.value(), 0.8);
/// assert_eq!(detector.call_count().await, 1);
/// ```
#[derive(Debug)]
pub struct MockAiDetector {
    /// Outcome returned by every call.
    outcome: Arc<RwLock<ProviderOutcome<f64>>>,
    /// Texts received, in call order.
    calls: Arc<RwLock<Vec<String>>>,
    /// Simulated provider latency.
    delay: Option<Duration>,
}

impl Default for MockAiDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAiDetector {
    /// Create a mock that reports an AI likelihood of 0.5.
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(RwLock::new(ProviderOutcome::Success(0.5))),
            calls: Arc::new(RwLock::new(Vec::new())),
            delay: None,
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the outcome for subsequent calls.
    pub async fn set_outcome(&self, outcome: ProviderOutcome<f64>) {
        *self.outcome.write().await = outcome;
    }

    /// Texts received so far.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl AiDetector for MockAiDetector {
    async fn detect(&self, text: &str) -> ProviderOutcome<f64> {
        self.calls.write().await.push(text.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.read().await.clone()
    }
}
