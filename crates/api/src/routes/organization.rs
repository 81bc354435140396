use axum::routing::{get, post};
use axum::Router;

use crate::handlers::organization;
use crate::state::AppState;

/// Student organization routes.
///
/// ```text
/// GET  /ucsborganization?orgCode=  -> get_by_code
/// PUT  /ucsborganization?orgCode=  -> update
/// GET  /ucsborganization/all       -> list
/// POST /ucsborganization/post      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/ucsborganization",
            get(organization::get_by_code).put(organization::update),
        )
        .route("/ucsborganization/all", get(organization::list))
        .route("/ucsborganization/post", post(organization::create))
}
