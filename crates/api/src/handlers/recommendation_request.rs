//! Handlers for the `/recommendationrequests` resource.

use axum::extract::State;
use axum::Json;
use campus_core::error::CoreError;
use campus_db::models::recommendation_request::{
    CreateRecommendationRequest, RecommendationRequest, UpdateRecommendationRequest, ENTITY_NAME,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::IdParams;
use crate::state::AppState;

/// POST /api/recommendationrequests/post?requesterEmail=&professorEmail=&explanation=&dateRequested=&dateNeeded=&done=
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(input): ApiQuery<CreateRecommendationRequest>,
) -> AppResult<Json<RecommendationRequest>> {
    let request = state.repos.recommendation_requests.create(&input).await?;

    tracing::info!(
        request_id = request.id,
        professor_email = %request.professor_email,
        user_id = admin.user_id,
        "Recommendation request created",
    );

    Ok(Json(request))
}

/// GET /api/recommendationrequests/all
pub async fn list(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RecommendationRequest>>> {
    let requests = state.repos.recommendation_requests.find_all().await?;
    Ok(Json(requests))
}

/// GET /api/recommendationrequests?id=
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    ApiQuery(IdParams { id }): ApiQuery<IdParams>,
) -> AppResult<Json<RecommendationRequest>> {
    let request = state
        .repos
        .recommendation_requests
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, id)))?;
    Ok(Json(request))
}

/// PUT /api/recommendationrequests?id=
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(IdParams { id }): ApiQuery<IdParams>,
    ApiJson(input): ApiJson<UpdateRecommendationRequest>,
) -> AppResult<Json<RecommendationRequest>> {
    let repo = &state.repos.recommendation_requests;
    let mut request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, id)))?;

    request.apply(input);
    let request = repo.save(&request).await?;

    tracing::info!(
        request_id = id,
        done = request.done,
        user_id = admin.user_id,
        "Recommendation request updated",
    );

    Ok(Json(request))
}
