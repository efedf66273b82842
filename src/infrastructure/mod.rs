//! Adapters behind the domain traits.
//!
//! - [`persistence`] - PostgreSQL store for URL mappings (the source of truth)
//! - [`cache`] - Redis read cache and its no-op stand-in

pub mod cache;
pub mod persistence;
