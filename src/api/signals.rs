//! Signal extraction endpoints.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::services::extractor::is_signal_url;
use crate::types::{SignalRecord, SignalUrlRequest, UrlValidation};
use crate::AppState;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self { data }
    }
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parse", post(parse_signal))
        .route("/validate", post(validate_url))
}

/// Fetch and extract a signal page.
async fn parse_signal(
    State(state): State<AppState>,
    Json(request): Json<SignalUrlRequest>,
) -> Result<Json<ApiResponse<SignalRecord>>> {
    let record = state.extractor.extract(&request.url).await?;

    info!(
        "Parsed signal {:?} from {}",
        record.signal_name(),
        record.source_url
    );

    Ok(Json(ApiResponse::new(record)))
}

/// Check a URL without fetching it.
async fn validate_url(Json(request): Json<SignalUrlRequest>) -> Json<ApiResponse<UrlValidation>> {
    Json(ApiResponse::new(UrlValidation {
        valid: is_signal_url(&request.url),
    }))
}
