//! Mock fact checker for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::fact_check::{ClaimResult, FactChecker};
use crate::outcome::ProviderOutcome;

/// Mock implementation of the FactChecker trait.
///
/// Returns a configurable outcome, records the texts it receives and can
/// simulate a slow provider.
#[derive(Debug)]
pub struct MockFactChecker {
    outcome: Arc<RwLock<ProviderOutcome<Vec<ClaimResult>>>>,
    calls: Arc<RwLock<Vec<String>>>,
    delay: Option<Duration>,
}

impl Default for MockFactChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFactChecker {
    /// Create a mock that finds no claims.
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(RwLock::new(ProviderOutcome::Success(Vec::new()))),
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
    pub async fn set_outcome(&self, outcome: ProviderOutcome<Vec<ClaimResult>>) {
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
impl FactChecker for MockFactChecker {
    async fn check(&self, text: &str) -> ProviderOutcome<Vec<ClaimResult>> {
        self.calls.write().await.push(text.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.read().await.clone()
    }
}
