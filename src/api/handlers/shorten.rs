//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::MISSING_URL_MESSAGE;

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "http://localhost:5000/AbC12xYz",
///   "short_code": "AbC12xYz"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not JSON, `long_url` is missing, or it is not HTTP(S)
/// - 500 on store failure or when collision retries are exhausted
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Shorten URL request rejected: {}", rejection.body_text());
        AppError::bad_request(MISSING_URL_MESSAGE)
    })?;

    payload.validate().inspect_err(|_| {
        warn!("Shorten URL request missing 'long_url'");
    })?;

    let long_url = payload.long_url.unwrap_or_default();
    let short = state.allocation_service.allocate(&long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short.short_url,
            short_code: short.short_code,
        }),
    ))
}
