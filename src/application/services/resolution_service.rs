//! Short code resolution: cache first, durable store on miss, repopulate.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::services::cache_fill::populate_cache;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::error::ResolveError;
use crate::infrastructure::cache::CacheService;
use crate::utils::deadline::{cache_call, store_call};

/// Tunables captured once when the service is built.
#[derive(Debug, Clone)]
pub struct ResolutionSettings {
    pub cache_ttl: Duration,
    pub store_timeout: Duration,
    pub cache_timeout: Duration,
}

impl ResolutionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache_ttl: config.cache_ttl(),
            store_timeout: config.store_timeout(),
            cache_timeout: config.cache_timeout(),
        }
    }
}

/// Service that maps a short code back to its long URL.
pub struct ResolutionService<R: MappingRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    settings: ResolutionSettings,
}

impl<R: MappingRepository> ResolutionService<R> {
    /// Creates a new resolution service.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn CacheService>,
        settings: ResolutionSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    /// Resolves `short_code` to the long URL it was allocated for.
    ///
    /// # Request Flow
    ///
    /// 1. Cache lookup; a hit returns without touching the store
    /// 2. On miss (expired, never cached, cache error or timeout), exact-match
    ///    lookup in the store
    /// 3. On store hit, repopulate the cache best-effort and return
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] when neither tier knows the code
    /// - [`ResolveError::Store`] when the store lookup fails or times out
    pub async fn resolve(&self, short_code: &str) -> Result<String, ResolveError> {
        if let Some(long_url) = self.cached(short_code).await {
            return Ok(long_url);
        }

        let mapping = store_call(
            self.settings.store_timeout,
            self.repository.find_by_code(short_code),
        )
        .await?;

        let Some(mapping) = mapping else {
            info!("Short code {} not found", short_code);
            return Err(ResolveError::NotFound);
        };

        populate_cache(
            self.cache.as_ref(),
            &mapping.short_code,
            &mapping.long_url,
            self.settings.cache_ttl,
            self.settings.cache_timeout,
        )
        .await;

        info!("Resolved {} to {} from store", short_code, mapping.long_url);
        Ok(mapping.long_url)
    }

    /// Cache lookup where every failure degrades to a miss.
    async fn cached(&self, short_code: &str) -> Option<String> {
        match cache_call(self.settings.cache_timeout, self.cache.get(short_code)).await {
            Ok(Some(long_url)) => {
                metrics::counter!("tinylink_cache_hits_total").increment(1);
                debug!("Cache HIT for {}", short_code);
                Some(long_url)
            }
            Ok(None) => {
                metrics::counter!("tinylink_cache_misses_total").increment(1);
                debug!("Cache MISS for {}", short_code);
                None
            }
            Err(e) => {
                metrics::counter!("tinylink_cache_errors_total").increment(1);
                warn!("Cache lookup for {} failed, falling back to store: {}", short_code, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockMappingRepository;
    use crate::error::StoreError;
    use crate::infrastructure::cache::{CacheError, CacheResult, MockCacheService};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn settings() -> ResolutionSettings {
        ResolutionSettings {
            cache_ttl: Duration::from_secs(300),
            store_timeout: Duration::from_secs(5),
            cache_timeout: Duration::from_millis(250),
        }
    }

    fn mapping(code: &str, url: &str) -> UrlMapping {
        UrlMapping::new(7, code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_store() {
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .withf(|code| code == "AbC12xYz")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/a/b".to_string())));
        cache.expect_set().times(0);

        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code().times(0);

        let service = ResolutionService::new(Arc::new(repo), Arc::new(cache), settings());

        let url = service.resolve("AbC12xYz").await.unwrap();
        assert_eq!(url, "https://example.com/a/b");
    }

    #[tokio::test]
    async fn test_resolve_cache_miss_falls_back_and_repopulates_once() {
        let mut cache = MockCacheService::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache
            .expect_set()
            .withf(|code, url, ttl| {
                code == "AbC12xYz"
                    && url == "https://example.com/a/b"
                    && *ttl == Duration::from_secs(300)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "AbC12xYz")
            .times(1)
            .returning(|code| Ok(Some(mapping(code, "https://example.com/a/b"))));

        let service = ResolutionService::new(Arc::new(repo), Arc::new(cache), settings());

        let url = service.resolve("AbC12xYz").await.unwrap();
        assert_eq!(url, "https://example.com/a/b");
    }

    #[tokio::test]
    async fn test_resolve_not_found_in_either_tier() {
        let mut cache = MockCacheService::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache.expect_set().times(0);

        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = ResolutionService::new(Arc::new(repo), Arc::new(cache), settings());

        let result = service.resolve("doesnotexist").await;
        assert!(matches!(result, Err(ResolveError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_cache_error_treated_as_miss() {
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_| Err(CacheError::Connection("redis down".to_string())));
        cache
            .expect_set()
            .times(1)
            .returning(|_, _, _| Err(CacheError::Connection("redis down".to_string())));

        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(mapping(code, "https://example.com"))));

        let service = ResolutionService::new(Arc::new(repo), Arc::new(cache), settings());

        let url = service.resolve("AbC12xYz").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_store_error_is_surfaced() {
        let mut cache = MockCacheService::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache.expect_set().times(0);

        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection refused".to_string())));

        let service = ResolutionService::new(Arc::new(repo), Arc::new(cache), settings());

        let result = service.resolve("AbC12xYz").await;
        assert!(matches!(result, Err(ResolveError::Store(_))));
    }

    /// In-process cache that honours writes, for hit-after-miss scenarios.
    #[derive(Default)]
    struct RecordingCache {
        entries: Mutex<HashMap<String, String>>,
        sets: Mutex<u32>,
    }

    #[async_trait]
    impl CacheService for RecordingCache {
        async fn get(&self, short_code: &str) -> CacheResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(short_code).cloned())
        }

        async fn set(&self, short_code: &str, long_url: &str, _ttl: Duration) -> CacheResult<()> {
            *self.sets.lock().unwrap() += 1;
            self.entries
                .lock()
                .unwrap()
                .insert(short_code.to_string(), long_url.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resolve_twice_second_call_hits_cache() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(mapping(code, "https://example.com/a/b"))));

        let cache = Arc::new(RecordingCache::default());
        let service = ResolutionService::new(Arc::new(repo), cache.clone(), settings());

        let first = service.resolve("AbC12xYz").await.unwrap();
        let second = service.resolve("AbC12xYz").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(*cache.sets.lock().unwrap(), 1);
    }

    struct StalledCache;

    #[async_trait]
    impl CacheService for StalledCache {
        async fn get(&self, _short_code: &str) -> CacheResult<Option<String>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Some("https://stale.example".to_string()))
        }

        async fn set(&self, _short_code: &str, _long_url: &str, _ttl: Duration) -> CacheResult<()> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_cache_timeouts_do_not_abort_request() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(mapping(code, "https://example.com"))));

        let service = ResolutionService::new(Arc::new(repo), Arc::new(StalledCache), settings());

        let url = service.resolve("AbC12xYz").await.unwrap();
        assert_eq!(url, "https://example.com");
    }
}
