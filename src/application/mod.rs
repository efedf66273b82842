//! Application layer services implementing business logic.
//!
//! Services orchestrate the code generator, the durable store and the cache
//! tier. They consume the repository and cache traits and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::AllocationService`] - Short code allocation with collision retry
//! - [`services::ResolutionService`] - Cache-first lookup with store fallback
//! - [`services::HealthService`] - Durable store reachability

pub mod services;
