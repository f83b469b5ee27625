//! Catalog of annotatable tables and the identifier allowlist.

use sqlx::PgPool;

/// Dataset-split prefixes that mark a table as annotatable.
pub const ANNOTATABLE_PREFIXES: &[&str] = &["train", "dev", "test"];

/// A table name that has passed the allowlist check.
///
/// Constructed only by [`TableCatalogRepo::resolve`]. Repositories that
/// interpolate a table identifier into query text accept this type instead
/// of a raw string, so unvalidated input cannot reach SQL.
#[derive(Debug, Clone)]
pub struct AllowedTable(String);

impl AllowedTable {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Lists annotatable tables and gates user-supplied table names.
pub struct TableCatalogRepo;

impl TableCatalogRepo {
    /// List base tables of the `public` schema whose names start with one
    /// of the given prefixes, ordered by name.
    ///
    /// A store with no matching tables yields an empty list, not an error.
    pub async fn list_with_prefixes(
        pool: &PgPool,
        prefixes: &[&str],
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name,)| name)
            .filter(|name| prefixes.iter().any(|prefix| name.starts_with(prefix)))
            .collect())
    }

    /// List the annotatable tables: base tables named after a dataset split.
    pub async fn list_annotatable(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        Self::list_with_prefixes(pool, ANNOTATABLE_PREFIXES).await
    }

    /// Resolve a user-supplied table name against the allowlist.
    ///
    /// Returns `None` when the name is not an annotatable table; callers
    /// must reject the request before building any statement.
    pub async fn resolve(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AllowedTable>, sqlx::Error> {
        let tables = Self::list_annotatable(pool).await?;
        let resolved = tables.into_iter().find(|t| t == name).map(AllowedTable);
        if resolved.is_none() {
            tracing::debug!(table = name, "Table name not in allowlist");
        }
        Ok(resolved)
    }
}
