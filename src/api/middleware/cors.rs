//! Cross-origin resource sharing for the browser frontend.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates a CORS layer allowing the configured origins with credentials.
///
/// Origins that are not valid header values are skipped with a warning, as
/// is `*`: a wildcard cannot be combined with credentials.
pub fn layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("Ignoring wildcard CORS origin; list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                    None
                }
            }
        })
        .collect();

    info!("CORS resources: {:?}", origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(origins: &[&str]) -> Router {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(layer(&origins))
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<HeaderValue> {
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_wildcard_origin_is_skipped() {
        let app = app(&["*", "http://a.test"]);

        assert_eq!(
            allowed_origin(app.clone(), "http://a.test").await,
            Some(HeaderValue::from_static("http://a.test"))
        );
        assert_eq!(allowed_origin(app, "http://other.test").await, None);
    }

    #[tokio::test]
    async fn test_only_wildcard_allows_nothing() {
        let app = app(&["*"]);

        assert_eq!(allowed_origin(app, "http://a.test").await, None);
    }
}
