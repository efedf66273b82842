//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::api::middleware::rate_limit;
use crate::config::Config;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Versioned API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /v1/shorten` - Allocate a short code for a long URL (rate limited per client IP)
pub fn api_routes(config: &Config) -> Router<AppState> {
    Router::new().route("/v1/shorten", post(shorten_handler)).layer(
        rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst),
    )
}
