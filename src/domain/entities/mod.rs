//! Core domain entities.
//!
//! A URL mapping is the only persistent entity. It is created exactly once
//! and never updated or deleted afterwards.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlMapping`] carries the caller-owned fields, while the store assigns
//! `id` and `created_at`.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
