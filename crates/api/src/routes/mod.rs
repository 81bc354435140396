pub mod admin;
pub mod auth;
pub mod health;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                   login (public)
/// /currentUser                                  caller identity (auth required)
///
/// /admin/users                                  list, create (admin only)
///
/// /ucsbmenuitemreview                           get ?id= (user), replace ?id= (admin)
/// /ucsbmenuitemreview/all                       list (user)
/// /ucsbmenuitemreview/post                      create (admin)
///
/// /recommendationrequests                       get ?id= (user), replace ?id= (admin)
/// /recommendationrequests/all                   list (user)
/// /recommendationrequests/post                  create (admin)
///
/// /ucsborganization                             get ?orgCode= (user), replace ?orgCode= (admin)
/// /ucsborganization/all                         list (user)
/// /ucsborganization/post                        create (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/admin", admin::router())
        .merge(menu_item_review::router())
        .merge(recommendation_request::router())
        .merge(organization::router())
}
