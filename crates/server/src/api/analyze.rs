//! Analysis endpoint.

use std::sync::Arc;

use aegis_core::{AnalysisError, AnalysisRequest, AnalysisResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Errors answered by the analysis endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// Text failed validation.
    Analysis(AnalysisError),
    /// Body was not a JSON object of the expected shape.
    InvalidBody(JsonRejection),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self::Analysis(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Analysis(err @ AnalysisError::TextTooShort { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// POST /analyze
///
/// Score the text for AI authorship and look up related fact checks.
/// Answers 200 whenever the text is long enough, even if a provider failed.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = body?;
    let response = state.analyzer().analyze(&request).await?;
    Ok(Json(response))
}
