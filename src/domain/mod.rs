//! Domain layer containing the URL mapping entity and its store contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete stores live in [`crate::infrastructure::persistence`];
//! orchestration lives in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Durable store trait and its tagged insert outcome

pub mod entities;
pub mod repositories;
