use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// The moderation store: one SQLite pool for the whole process.
    pub pool: ctrl_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
