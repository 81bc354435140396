//! Handlers for the `/ucsbmenuitemreview` resource.

use axum::extract::State;
use axum::Json;
use campus_core::error::CoreError;
use campus_db::models::menu_item_review::{
    CreateMenuItemReview, UcsbMenuItemReview, UpdateMenuItemReview, ENTITY_NAME,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::IdParams;
use crate::state::AppState;

/// POST /api/ucsbmenuitemreview/post?itemId=&stars=&reviewerEmail=&dateReviewed=&comments=
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(input): ApiQuery<CreateMenuItemReview>,
) -> AppResult<Json<UcsbMenuItemReview>> {
    let review = state.repos.menu_item_reviews.create(&input).await?;

    tracing::info!(
        review_id = review.id,
        item_id = review.item_id,
        user_id = admin.user_id,
        "Menu item review created",
    );

    Ok(Json(review))
}

/// GET /api/ucsbmenuitemreview/all
pub async fn list(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UcsbMenuItemReview>>> {
    let reviews = state.repos.menu_item_reviews.find_all().await?;
    Ok(Json(reviews))
}

/// GET /api/ucsbmenuitemreview?id=
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    ApiQuery(IdParams { id }): ApiQuery<IdParams>,
) -> AppResult<Json<UcsbMenuItemReview>> {
    let review = state
        .repos
        .menu_item_reviews
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, id)))?;
    Ok(Json(review))
}

/// PUT /api/ucsbmenuitemreview?id=
///
/// Replace every field of an existing review.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(IdParams { id }): ApiQuery<IdParams>,
    ApiJson(input): ApiJson<UpdateMenuItemReview>,
) -> AppResult<Json<UcsbMenuItemReview>> {
    let repo = &state.repos.menu_item_reviews;
    let mut review = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, id)))?;

    review.apply(input);
    let review = repo.save(&review).await?;

    tracing::info!(review_id = id, user_id = admin.user_id, "Menu item review updated");

    Ok(Json(review))
}
