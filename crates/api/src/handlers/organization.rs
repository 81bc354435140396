//! Handlers for the `/ucsborganization` resource.
//!
//! Organizations are keyed by `orgCode`, supplied by the caller on create and
//! used as the lookup parameter everywhere else.

use axum::extract::State;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::validation::validate_input;
use campus_db::models::organization::{
    CreateOrganization, UcsbOrganization, UpdateOrganization, ENTITY_NAME,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::OrgCodeParams;
use crate::state::AppState;

/// POST /api/ucsborganization/post?orgCode=&orgTranslationShort=&orgTranslation=&inactive=
///
/// Posting an existing code overwrites that organization.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(input): ApiQuery<CreateOrganization>,
) -> AppResult<Json<UcsbOrganization>> {
    validate_input(&input)?;

    let org = state.repos.organizations.create(&input).await?;

    tracing::info!(
        org_code = %org.org_code,
        user_id = admin.user_id,
        "Organization created",
    );

    Ok(Json(org))
}

/// GET /api/ucsborganization/all
pub async fn list(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UcsbOrganization>>> {
    let orgs = state.repos.organizations.find_all().await?;
    Ok(Json(orgs))
}

/// GET /api/ucsborganization?orgCode=
pub async fn get_by_code(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    ApiQuery(OrgCodeParams { org_code }): ApiQuery<OrgCodeParams>,
) -> AppResult<Json<UcsbOrganization>> {
    let org = state
        .repos
        .organizations
        .find_by_id(&org_code)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, &org_code)))?;
    Ok(Json(org))
}

/// PUT /api/ucsborganization?orgCode=
///
/// Replace the translations and status of an existing organization. The code
/// itself never changes.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(OrgCodeParams { org_code }): ApiQuery<OrgCodeParams>,
    ApiJson(input): ApiJson<UpdateOrganization>,
) -> AppResult<Json<UcsbOrganization>> {
    let repo = &state.repos.organizations;
    let mut org = repo
        .find_by_id(&org_code)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY_NAME, &org_code)))?;

    org.apply(input);
    let org = repo.save(&org).await?;

    tracing::info!(
        org_code = %org_code,
        inactive = org.inactive,
        user_id = admin.user_id,
        "Organization updated",
    );

    Ok(Json(org))
}
