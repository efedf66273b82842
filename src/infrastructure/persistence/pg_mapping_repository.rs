//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::StoreError;
use crate::utils::db_error::{is_unique_violation_on_code, map_sqlx_error};

/// PostgreSQL repository for URL mappings.
///
/// Inserts are a single `INSERT ... RETURNING` statement against the unique
/// constraint on `short_code`, so concurrent writers on any number of
/// instances can never both claim the same code.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn mapping_from_row(row: &PgRow) -> Result<UrlMapping, StoreError> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let short_code: String = row.try_get("short_code").map_err(map_sqlx_error)?;
    let long_url: String = row.try_get("long_url").map_err(map_sqlx_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_sqlx_error)?;

    Ok(UrlMapping::new(id, short_code, long_url, created_at))
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: &NewUrlMapping) -> Result<InsertOutcome, StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            r#"
            INSERT INTO url_mappings (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_one(&mut *tx)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback after failed insert also failed: {}", rollback_err);
                }

                if is_unique_violation_on_code(&err) {
                    return Ok(InsertOutcome::CodeTaken);
                }
                return Err(map_sqlx_error(err));
            }
        };

        let mapping = mapping_from_row(&row)?;
        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(InsertOutcome::Inserted(mapping))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(mapping_from_row).transpose()
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
