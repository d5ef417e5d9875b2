use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no request data; every handler reads or writes
/// storage through `pool` and keeps nothing between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: relief_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Directory-backed store for incident attachments.
    pub media: Arc<MediaStore>,
}
