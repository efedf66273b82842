#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::config::Config;
use tinylink::infrastructure::cache::NullCache;
use tinylink::infrastructure::persistence::PgMappingRepository;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:5000";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        redis_url: None,
        base_url: BASE_URL.to_string(),
        listen_addr: "127.0.0.1:5000".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        cache_ttl_minutes: 5,
        max_allocation_attempts: 3,
        store_timeout_ms: 5000,
        cache_timeout_ms: 250,
        cors_origins: vec!["http://localhost:3000".to_string()],
        rate_limit_per_second: 2,
        rate_limit_burst: 100,
        db_max_connections: 5,
        db_connect_timeout: 1,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    }
}

pub async fn create_test_mapping(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO url_mappings (short_code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    AppState::new(repository, Arc::new(NullCache), &test_config())
}
