use axum::routing::get;
use axum::Router;

use crate::handlers::tagging;
use crate::state::AppState;

/// Review routes for one annotatable table.
///
/// ```text
/// GET  /tag_table/{table}    render_page (?page=)
/// POST /tag_table/{table}    submit_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/tag_table/{table}",
        get(tagging::render_page).post(tagging::submit_page),
    )
}
