use axum::routing::{get, post};
use axum::Router;

use crate::handlers::menu_item_review;
use crate::state::AppState;

/// Menu item review routes.
///
/// ```text
/// GET  /ucsbmenuitemreview?id=   -> get_by_id
/// PUT  /ucsbmenuitemreview?id=   -> update
/// GET  /ucsbmenuitemreview/all   -> list
/// POST /ucsbmenuitemreview/post  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/ucsbmenuitemreview",
            get(menu_item_review::get_by_id).put(menu_item_review::update),
        )
        .route("/ucsbmenuitemreview/all", get(menu_item_review::list))
        .route("/ucsbmenuitemreview/post", post(menu_item_review::create))
}
