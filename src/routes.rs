//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_code}`     - Short link redirect (302)
//! - `GET  /_health`          - Durable store health check
//! - `POST /api/v1/shorten`   - Short code allocation (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins with credentials
//! - **Rate limiting** - Per-IP token bucket on the shorten endpoint
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/_health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes(config))
        .with_state(state)
        .layer(cors::layer(&config.cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
