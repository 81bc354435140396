use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recommendation_request;
use crate::state::AppState;

/// Recommendation request routes.
///
/// ```text
/// GET  /recommendationrequests?id=   -> get_by_id
/// PUT  /recommendationrequests?id=   -> update
/// GET  /recommendationrequests/all   -> list
/// POST /recommendationrequests/post  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendationrequests",
            get(recommendation_request::get_by_id).put(recommendation_request::update),
        )
        .route("/recommendationrequests/all", get(recommendation_request::list))
        .route("/recommendationrequests/post", post(recommendation_request::create))
}
