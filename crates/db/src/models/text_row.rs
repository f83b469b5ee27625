use rowtag_core::types::{DbId, LabelCode};
use serde::Serialize;
use sqlx::FromRow;

/// A row from an annotated table (`train_*` / `dev_*` / `test_*`).
///
/// `label` stays null until a human annotates the row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TextRow {
    pub text_id: DbId,
    pub text: String,
    pub label: Option<LabelCode>,
}
