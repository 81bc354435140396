use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Login and identity routes, mounted under `/api`.
///
/// ```text
/// POST /auth/login   -> login
/// GET  /currentUser  -> current_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/currentUser", get(auth::current_user))
}
