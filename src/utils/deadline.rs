//! Bounded waits for store and cache calls.

use crate::error::StoreError;
use crate::infrastructure::cache::CacheError;
use std::future::Future;
use std::time::Duration;

/// Runs a store call, converting an elapsed deadline into [`StoreError::Timeout`].
pub async fn store_call<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(StoreError::Timeout(limit)))
}

/// Runs a cache call, converting an elapsed deadline into [`CacheError::Timeout`].
pub async fn cache_call<T, F>(limit: Duration, call: F) -> Result<T, CacheError>
where
    F: Future<Output = Result<T, CacheError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(CacheError::Timeout(limit)))
}
