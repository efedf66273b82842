mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use tinylink::api::handlers::{redirect_handler, shorten_handler};

fn app(pool: PgPool) -> Router {
    let state = common::create_test_state(pool);
    Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_mapping(&pool, "redirect", "https://example.com/target").await;
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Short URL not found" })
    );
}

#[sqlx::test]
async fn test_redirect_is_repeatable(pool: PgPool) {
    common::create_test_mapping(&pool, "again123", "https://example.com/again").await;
    let server = TestServer::new(app(pool)).unwrap();

    let first = server.get("/again123").await;
    let second = server.get("/again123").await;

    assert_eq!(first.header("location"), second.header("location"));
}

#[sqlx::test]
async fn test_shorten_then_redirect_end_to_end(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let created = server
        .post("/api/v1/shorten")
        .json(&json!({ "long_url": "https://example.com/a/b" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a/b");
}
