//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every lookup is a miss and every write succeeds without storing anything,
/// so all reads fall through to the durable store.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Integration tests that exercise the store fallback
/// - Fallback when Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _short_code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _short_code: &str, _long_url: &str, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }
}
