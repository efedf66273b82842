//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),
    #[error("cache operation error: {0}")]
    Operation(String),
    #[error("cache operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code → long URL entries with a per-entry TTL.
///
/// Implementations report failures honestly; it is the caller that treats
/// the cache as best-effort. An expired entry and an entry that was never
/// written are indistinguishable: both are `Ok(None)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the long URL cached for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or expiry
    async fn get(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping that expires `ttl` after the write.
    async fn set(&self, short_code: &str, long_url: &str, ttl: Duration) -> CacheResult<()>;
}
