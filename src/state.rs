//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{
    AllocationService, AllocationSettings, HealthService, ResolutionService, ResolutionSettings,
};
use crate::config::Config;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::utils::code_generator::Base58CodeGenerator;

pub type Allocator = AllocationService<PgMappingRepository, Base58CodeGenerator>;
pub type Resolver = ResolutionService<PgMappingRepository>;
pub type HealthChecker = HealthService<PgMappingRepository>;

/// Engines built once at process start and shared by reference.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<Allocator>,
    pub resolution_service: Arc<Resolver>,
    pub health_service: Arc<HealthChecker>,
}

impl AppState {
    /// Wires the engines around one repository and one cache handle.
    pub fn new(
        repository: Arc<PgMappingRepository>,
        cache: Arc<dyn CacheService>,
        config: &Config,
    ) -> Self {
        let allocation_service = AllocationService::new(
            repository.clone(),
            cache.clone(),
            Base58CodeGenerator::default(),
            AllocationSettings::from_config(config),
        );
        let resolution_service = ResolutionService::new(
            repository.clone(),
            cache,
            ResolutionSettings::from_config(config),
        );
        let health_service = HealthService::new(repository, config.store_timeout());

        Self {
            allocation_service: Arc::new(allocation_service),
            resolution_service: Arc::new(resolution_service),
            health_service: Arc::new(health_service),
        }
    }
}
