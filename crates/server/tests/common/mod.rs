//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock providers injected, so the HTTP surface can be exercised
//! without contacting Winston AI or Google.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use aegis_core::{
    testing::{MockAiDetector, MockFactChecker},
    AiDetector, Analyzer, Config, FactChecker,
};
use aegis_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use aegis_core::testing::fixtures;

/// Test fixture for E2E testing with mock providers.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock AI detector - configure the score
    pub detector: Arc<MockAiDetector>,
    /// Mock fact checker - configure the claims
    pub fact_checker: Arc<MockFactChecker>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture with default config and mocks.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let detector = Arc::new(MockAiDetector::new());
        let fact_checker = Arc::new(MockFactChecker::new());

        let analyzer = Analyzer::new(
            Arc::clone(&detector) as Arc<dyn AiDetector>,
            Arc::clone(&fact_checker) as Arc<dyn FactChecker>,
        );
        let state = Arc::new(AppState::new(config, analyzer));

        Self {
            router: create_router(state),
            detector,
            fact_checker,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, &body.to_string()).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send an arbitrary request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }
}

/// Drive `router` with one request and collect the response.
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();

    let text = String::from_utf8_lossy(&body_bytes).into_owned();
    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
        text,
    }
}
