use std::sync::Arc;

use campus_db::{DbPool, Repositories};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when running on in-memory repositories.
    pub pool: Option<DbPool>,
    /// Server configuration (JWT settings, admin allow-list).
    pub config: Arc<ServerConfig>,
    /// Repository handles for every resource.
    pub repos: Repositories,
}
