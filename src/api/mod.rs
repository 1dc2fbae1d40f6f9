//! HTTP surface for the front end: selections in, job snapshots out.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;

pub mod handlers;
pub mod routes;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidImageFormat
            | AppError::MissingSelection(_)
            | AppError::MissingRequiredField(_)
            | AppError::InvalidCategory(_)
            | AppError::NoSourceImage => StatusCode::BAD_REQUEST,
            AppError::UnknownJob(_) => StatusCode::NOT_FOUND,
            AppError::JobInFlight(_) => StatusCode::CONFLICT,
            AppError::MissingPrompt(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_)
            | AppError::Gemini(_)
            | AppError::GenerationBlocked { .. }
            | AppError::GenerationFailed { .. }
            | AppError::SuggestionFailed(_)
            | AppError::EmptySuggestion => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
