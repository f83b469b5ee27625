//! Repository for annotated text tables (one table per dataset split).

use rowtag_core::types::{DbId, LabelCode};
use sqlx::PgPool;

use crate::models::text_row::TextRow;
use crate::repositories::table_catalog_repo::AllowedTable;

/// Column list for text row queries.
const COLUMNS: &str = "text_id, text, label";

/// Read and update operations on a single annotated table.
pub struct TextRowRepo;

impl TextRowRepo {
    /// Total number of rows in the table.
    pub async fn count(pool: &PgPool, table: &AllowedTable) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", table.name());
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    /// Fetch one page of rows ordered by `text_id` ascending.
    ///
    /// Ascending `text_id` order is what keeps offset pagination stable. A
    /// short final page, or an empty result when `offset` is past the last
    /// row, is a normal read.
    pub async fn fetch_page(
        pool: &PgPool,
        table: &AllowedTable,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TextRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY text_id ASC LIMIT $1 OFFSET $2",
            table.name()
        );
        sqlx::query_as::<_, TextRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set the label code on a single row, keyed by `text_id`.
    ///
    /// Returns `false` when no row matched.
    pub async fn update_label(
        pool: &PgPool,
        table: &AllowedTable,
        text_id: DbId,
        label: LabelCode,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("UPDATE {} SET label = $1 WHERE text_id = $2", table.name());
        let result = sqlx::query(&query)
            .bind(label)
            .bind(text_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
