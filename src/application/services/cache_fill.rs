//! Best-effort cache writes shared by both engines.

use std::time::Duration;

use tracing::{debug, warn};

use crate::infrastructure::cache::CacheService;
use crate::utils::deadline::cache_call;

/// Writes `short_code → long_url` to the cache, logging and discarding any
/// failure or timeout.
pub(crate) async fn populate_cache(
    cache: &dyn CacheService,
    short_code: &str,
    long_url: &str,
    ttl: Duration,
    timeout: Duration,
) {
    match cache_call(timeout, cache.set(short_code, long_url, ttl)).await {
        Ok(()) => debug!("Cached {} for {:?}", short_code, ttl),
        Err(e) => {
            metrics::counter!("tinylink_cache_errors_total").increment(1);
            warn!("Failed to cache {}: {}", short_code, e);
        }
    }
}
