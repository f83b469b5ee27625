use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Index payload: service identity and its entrypoints.
#[derive(Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET / -- names the service and where to go next.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: env!("CARGO_PKG_NAME"),
        endpoints: &[
            "GET /health",
            "GET /tables_list",
            "GET /tag_table/{table}?page=",
            "POST /tag_table/{table}",
        ],
    })
}

/// Mount the index route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
