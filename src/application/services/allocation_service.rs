//! Short code allocation: generate, insert with collision retry, populate cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::services::cache_fill::populate_cache;
use crate::config::Config;
use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AllocateError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::deadline::store_call;
use crate::utils::url_validator::validate_long_url;

/// Default bound on insert attempts per allocation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tunables captured once when the service is built.
#[derive(Debug, Clone)]
pub struct AllocationSettings {
    /// Prefix of every returned short URL, without trailing slash.
    pub base_url: String,
    pub max_attempts: u32,
    pub cache_ttl: Duration,
    pub store_timeout: Duration,
    pub cache_timeout: Duration,
}

impl AllocationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_attempts: config.max_allocation_attempts,
            cache_ttl: config.cache_ttl(),
            store_timeout: config.store_timeout(),
            cache_timeout: config.cache_timeout(),
        }
    }
}

/// A freshly allocated short code and its fully-qualified URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub short_code: String,
    pub short_url: String,
}

/// Service that turns a long URL into a durable short code.
///
/// Uniqueness is decided by the store's constrained insert, never by an
/// in-process check, so any number of instances may allocate concurrently.
pub struct AllocationService<R: MappingRepository, G: CodeGenerator> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    generator: G,
    settings: AllocationSettings,
}

impl<R: MappingRepository, G: CodeGenerator> AllocationService<R, G> {
    /// Creates a new allocation service.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn CacheService>,
        generator: G,
        settings: AllocationSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            generator,
            settings,
        }
    }

    /// Allocates a short code for `long_url`.
    ///
    /// # Algorithm
    ///
    /// Up to `max_attempts` times: generate a candidate, insert it. A taken
    /// code consumes the attempt and retries; any other store failure aborts
    /// immediately. On success the cache is populated best-effort.
    ///
    /// # Errors
    ///
    /// - [`AllocateError::Validation`] if `long_url` is empty or not HTTP(S);
    ///   no code is generated and no store or cache call is made
    /// - [`AllocateError::Store`] on store failure or timeout
    /// - [`AllocateError::Exhausted`] when every attempt collided
    pub async fn allocate(&self, long_url: &str) -> Result<ShortUrl, AllocateError> {
        if let Err(e) = validate_long_url(long_url) {
            warn!("Rejected long_url {:?}: {}", long_url, e);
            return Err(AllocateError::Validation(e.to_string()));
        }

        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            let new_mapping = NewUrlMapping::new(self.generator.generate(), long_url);

            let outcome = store_call(
                self.settings.store_timeout,
                self.repository.insert(&new_mapping),
            )
            .await
            .inspect_err(|e| error!("Error shortening URL {}: {}", long_url, e))?;

            match outcome {
                InsertOutcome::Inserted(mapping) => {
                    populate_cache(
                        self.cache.as_ref(),
                        &mapping.short_code,
                        &mapping.long_url,
                        self.settings.cache_ttl,
                        self.settings.cache_timeout,
                    )
                    .await;

                    metrics::counter!("tinylink_allocations_total").increment(1);
                    info!("URL shortened: {} -> {}", long_url, mapping.short_code);

                    return Ok(ShortUrl {
                        short_url: self.short_url_for(&mapping.short_code),
                        short_code: mapping.short_code,
                    });
                }
                InsertOutcome::CodeTaken => {
                    metrics::counter!("tinylink_code_collisions_total").increment(1);
                    warn!(
                        "Short code collision for {} (attempt {}/{}). Retrying...",
                        new_mapping.short_code, attempt, max_attempts
                    );
                }
            }
        }

        metrics::counter!("tinylink_allocation_exhausted_total").increment(1);
        error!(
            "Failed to generate unique short code after {} attempts",
            max_attempts
        );

        Err(AllocateError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// Constructs the full short URL for a code.
    pub fn short_url_for(&self, short_code: &str) -> String {
        format!("{}/{}", self.settings.base_url, short_code)
    }
}
