use std::sync::Arc;

use rowtag_core::labels::LabelSet;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc`. The label set and config
/// are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rowtag_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Label codec, built once from `LABELS` at startup.
    pub labels: Arc<LabelSet>,
}
