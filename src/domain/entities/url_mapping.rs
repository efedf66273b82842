//! URL mapping entity representing a short code → long URL relation.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and its redirect target.
///
/// `id` and `created_at` are owned by the durable store and are immutable
/// once the row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub long_url: String,
}

impl NewUrlMapping {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
