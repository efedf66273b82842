//! Repository trait for the durable short code → long URL relation.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::StoreError;
use async_trait::async_trait;

/// Result of a single constrained insert attempt.
///
/// A taken short code is an expected outcome of random allocation, so it is
/// reported as a value rather than as an error. Every other failure is a
/// [`StoreError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row is durable; carries the store-assigned fields.
    Inserted(UrlMapping),
    /// The uniqueness constraint on `short_code` rejected the row.
    CodeTaken,
}

/// Repository interface for URL mappings.
///
/// Uniqueness of `short_code` is enforced by the store itself. Implementations
/// must perform the uniqueness check and the write as one atomic statement,
/// never as check-then-insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Returns
    ///
    /// - `Ok(InsertOutcome::Inserted(_))` once the row is committed
    /// - `Ok(InsertOutcome::CodeTaken)` on a uniqueness violation on `short_code`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for any other failure, including violations of
    /// unrelated constraints. The attempt is rolled back before returning.
    async fn insert(&self, new_mapping: &NewUrlMapping) -> Result<InsertOutcome, StoreError>;

    /// Finds a mapping by exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
