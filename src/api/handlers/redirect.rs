//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Cache Strategy
///
/// Resolution is cache-first; a miss falls back to the durable store and
/// repopulates the cache. See [`crate::application::services::ResolutionService`].
///
/// # Errors
///
/// Returns 404 `{"error": "Short URL not found"}` if neither tier knows the code.
/// Returns 500 if the durable store lookup fails.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.resolution_service.resolve(&short_code).await?;

    info!("Redirecting {} to {}", short_code, long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
