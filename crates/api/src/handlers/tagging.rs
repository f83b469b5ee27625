//! Review controller: paginated rendering of annotated rows and batch
//! label submission.
//!
//! Render is read-only; Submit applies one rendered page of edits row by
//! row and then falls through to the read path, so the client always sees
//! the freshly stored state.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use rowtag_core::error::CoreError;
use rowtag_core::pagination;
use rowtag_core::types::{DbId, LabelCode};
use rowtag_db::repositories::{AllowedTable, TableCatalogRepo, TextRowRepo};
use rowtag_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   View types
   -------------------------------------------------------------------------- */

/// One row of a rendered page, with the stored code decoded for display.
///
/// `label_string` is `null` while the row is unannotated.
#[derive(Debug, Serialize)]
pub struct LabeledRow {
    pub text_id: DbId,
    pub text: String,
    pub label: Option<LabelCode>,
    pub label_string: Option<String>,
}

/// A rendered page of rows plus the full label option list for re-tagging.
#[derive(Debug, Serialize)]
pub struct TablePage {
    pub table: String,
    pub page: i64,
    pub per_page: i64,
    pub offset: i64,
    pub total: i64,
    pub total_pages: i64,
    pub rows: Vec<LabeledRow>,
    pub options: Vec<String>,
}

/// Query parameters for the render path (`?page=`, 1-based, default 1).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// A slot of the submitted form that could not be stored.
#[derive(Debug, Serialize)]
pub struct SlotFailure {
    /// 1-based position of the slot in the submitted page.
    pub slot: i64,
    /// Parsed row key, when the slot carried a parseable one.
    pub text_id: Option<DbId>,
    pub reason: String,
}

/// Outcome of one submitted batch: which rows were stored, which were not,
/// and the re-rendered page.
#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    pub updated: Vec<DbId>,
    pub failed: Vec<SlotFailure>,
    pub page: TablePage,
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// GET /tag_table/{table}
///
/// Render one page of rows with decoded labels. No mutation.
pub async fn render_page(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let table = resolve_table(&state.pool, &table).await?;
    let page = pagination::clamp_page(params.page);

    let view = load_page(&state, &table, page).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /tag_table/{table}
///
/// Apply one page of label edits, then fall through to the read path.
///
/// The form carries `page`, `per_page`, `offset`, and an `id{j}`/`option{j}`
/// pair per slot. Only `page` is honored, and only to address the page being
/// edited; `per_page` and `offset` are hints that get recomputed from server
/// configuration. A slot with no `id{j}`/`option{j}` pair marks a short
/// final page and is skipped. Each row update is its own unit of work, in
/// slot order: a failed slot is reported in the outcome and the remaining
/// slots still apply. There is no cross-row transaction, and concurrent
/// submissions to the same table race with later-write-wins semantics.
pub async fn submit_page(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    let table = resolve_table(&state.pool, &table).await?;
    let page = pagination::clamp_page(form.get("page").and_then(|v| v.parse().ok()));
    let per_page = state.config.page_size;

    let mut updated = Vec::new();
    let mut failed = Vec::new();

    for slot in 1..=per_page {
        let (id, option) = match (
            form.get(&format!("id{slot}")),
            form.get(&format!("option{slot}")),
        ) {
            (Some(id), Some(option)) => (id, option),
            // No row at this slot: the rendered page ended before it.
            _ => continue,
        };

        let text_id: DbId = match id.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                failed.push(SlotFailure {
                    slot,
                    text_id: None,
                    reason: format!("invalid text_id '{id}'"),
                });
                continue;
            }
        };

        let code = match state.labels.encode(option) {
            Ok(code) => code,
            Err(err) => {
                failed.push(SlotFailure {
                    slot,
                    text_id: Some(text_id),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match TextRowRepo::update_label(&state.pool, &table, text_id, code).await {
            Ok(true) => updated.push(text_id),
            Ok(false) => failed.push(SlotFailure {
                slot,
                text_id: Some(text_id),
                reason: "no row with this text_id".to_string(),
            }),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    table = table.name(),
                    text_id,
                    "Label update failed"
                );
                failed.push(SlotFailure {
                    slot,
                    text_id: Some(text_id),
                    reason: "store error".to_string(),
                });
            }
        }
    }

    tracing::info!(
        table = table.name(),
        page,
        updated = updated.len(),
        failed = failed.len(),
        "Batch label update applied"
    );

    let view = load_page(&state, &table, page).await?;
    Ok(Json(DataResponse {
        data: SubmitOutcome {
            updated,
            failed,
            page: view,
        },
    }))
}

/* --------------------------------------------------------------------------
   Shared read path
   -------------------------------------------------------------------------- */

/// Resolve a path-supplied table name against the allowlist.
async fn resolve_table(pool: &DbPool, name: &str) -> Result<AllowedTable, AppError> {
    TableCatalogRepo::resolve(pool, name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::UnknownTable {
                name: name.to_string(),
            })
        })
}

/// Count, fetch, and decode one page of rows.
///
/// A null stored label decodes to the null sentinel; a non-null code outside
/// the label set is an error, never a silent default.
async fn load_page(state: &AppState, table: &AllowedTable, page: i64) -> Result<TablePage, AppError> {
    let per_page = state.config.page_size;
    let total = TextRowRepo::count(&state.pool, table).await?;
    let offset = pagination::offset(page, per_page);
    let rows = TextRowRepo::fetch_page(&state.pool, table, per_page, offset).await?;

    let mut labeled = Vec::with_capacity(rows.len());
    for row in rows {
        let label_string = match row.label {
            Some(code) => Some(state.labels.decode(code).map_err(AppError::Core)?.to_string()),
            None => None,
        };
        labeled.push(LabeledRow {
            text_id: row.text_id,
            text: row.text,
            label: row.label,
            label_string,
        });
    }

    Ok(TablePage {
        table: table.name().to_string(),
        page,
        per_page,
        offset,
        total,
        total_pages: pagination::total_pages(total, per_page),
        rows: labeled,
        options: state.labels.labels().to_vec(),
    })
}
