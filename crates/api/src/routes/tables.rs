use axum::routing::get;
use axum::Router;

use crate::handlers::tables;
use crate::state::AppState;

/// Table listing route.
///
/// ```text
/// GET /tables_list    tables_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/tables_list", get(tables::tables_list))
}
