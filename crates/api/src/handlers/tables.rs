//! Handler for the annotatable table listing.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use rowtag_db::repositories::TableCatalogRepo;

use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for `GET /tables_list`.
#[derive(Debug, Serialize)]
pub struct TablesList {
    pub tables: Vec<String>,
    /// User-visible notice when the store could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /tables_list
///
/// List annotatable tables. A store failure degrades to an empty list with
/// a "no data" message instead of an error response; this is the only path
/// that swallows store errors. Fetch and update paths always propagate.
pub async fn tables_list(State(state): State<AppState>) -> Json<DataResponse<TablesList>> {
    match TableCatalogRepo::list_annotatable(&state.pool).await {
        Ok(tables) => Json(DataResponse {
            data: TablesList {
                tables,
                message: None,
            },
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Table listing failed, degrading to empty list");
            Json(DataResponse {
                data: TablesList {
                    tables: Vec::new(),
                    message: Some("No tables found".to_string()),
                },
            })
        }
    }
}
