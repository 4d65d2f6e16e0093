use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The storage handle lives here and is passed explicitly into every
/// repository call; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
