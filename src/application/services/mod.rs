//! Business logic services for the application layer.

mod cache_fill;

pub mod allocation_service;
pub mod health_service;
pub mod resolution_service;

pub use allocation_service::{AllocationService, AllocationSettings, ShortUrl};
pub use health_service::HealthService;
pub use resolution_service::{ResolutionService, ResolutionSettings};
