//! Durable store reachability check.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;
use crate::utils::deadline::store_call;

/// Reports whether the durable store answers within the store timeout.
///
/// The cache is not checked.
pub struct HealthService<R: MappingRepository> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R: MappingRepository> HealthService<R> {
    pub fn new(repository: Arc<R>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }

    /// # Errors
    ///
    /// Returns the [`StoreError`] raised by the ping, or a timeout.
    pub async fn check(&self) -> Result<(), StoreError> {
        store_call(self.store_timeout, self.repository.ping()).await
    }
}
