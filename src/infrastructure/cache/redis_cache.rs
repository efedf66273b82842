//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache for short code lookups.
///
/// Entries are stored under the bare short code with `SET key value EX ttl`.
/// Connection reuse and reconnects are handled by `ConnectionManager`.
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

/// Redis rejects `EX 0`; entries always live at least one second.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(short_code)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", short_code, e)))?;

        match &value {
            Some(_) => debug!("Cache HIT: {}", short_code),
            None => debug!("Cache MISS: {}", short_code),
        }

        Ok(value)
    }

    async fn set(&self, short_code: &str, long_url: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.client.clone();
        let seconds = ttl_seconds(ttl);

        conn.set_ex::<_, _, ()>(short_code, long_url, seconds)
            .await
            .map_err(|e| CacheError::Operation(format!("SET {}: {}", short_code, e)))?;

        debug!("Cache SET: {} -> {} (TTL: {}s)", short_code, long_url, seconds);
        Ok(())
    }
}
