pub mod health;
pub mod index;
pub mod tables;
pub mod tagging;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                      index
/// GET  /health                health_check
/// GET  /tables_list           tables_list
/// GET  /tag_table/{table}     render_page (?page=)
/// POST /tag_table/{table}     submit_page
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(tables::router())
        .merge(tagging::router())
}
