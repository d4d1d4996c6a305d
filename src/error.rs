use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message shown to API callers for any fetch or extraction failure.
pub const EXTRACTION_FAILED: &str = "Failed to parse signal data";

/// Errors raised while turning a signal URL into a record.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid signal URL format: {0}")]
    InvalidIdentifierFormat(String),

    #[error("Fetch failed: {0}")]
    FetchFailure(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailure(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        ExtractError::FetchFailure(e.to_string())
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::InvalidIdentifierFormat(_) => {
                AppError::BadRequest("Invalid signal URL format".to_string())
            }
            ExtractError::FetchFailure(_) | ExtractError::ExtractionFailure(_) => {
                // Selector details stay in the log, callers get a stable message.
                error!("Signal extraction error: {}", e);
                AppError::ExternalApi(EXTRACTION_FAILED.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
