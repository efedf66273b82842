//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the backend can reach its durable store.
///
/// # Endpoint
///
/// `GET /_health`
///
/// # Response Codes
///
/// - **200 OK**: Database answered `SELECT 1` within the store timeout
/// - **500 Internal Server Error**: Database unreachable or timed out
///
/// Cache reachability is not checked.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.health_service.check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(e) => {
            error!("Health check failed: Database connection error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::unhealthy(format!(
                    "Database connection failed: {}",
                    e
                ))),
            )
        }
    }
}
