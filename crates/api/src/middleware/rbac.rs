//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose roles do not
//! meet the requirement. Handlers list the guard as their first argument so
//! the check runs before any parameter binding or repository call.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campus_core::error::CoreError;
use campus_core::roles::{has_any_role, ROLE_ADMIN, ROLE_USER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Reject `user` with 403 unless it holds one of `required`.
pub fn require_any_role(user: &AuthUser, required: &[&str]) -> Result<(), AppError> {
    if has_any_role(&user.roles, required) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Access denied: requires one of {}",
            required.join(", ")
        ))))
    }
}

/// Requires `ROLE_ADMIN`. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_any_role(&user, &[ROLE_ADMIN])?;
        Ok(RequireAdmin(user))
    }
}

/// Requires `ROLE_USER` (administrators qualify too).
pub struct RequireUser(pub AuthUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_any_role(&user, &[ROLE_USER, ROLE_ADMIN])?;
        Ok(RequireUser(user))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn principal(roles: &[&str]) -> AuthUser {
        AuthUser {
            user_id: 1,
            username: "gaucho".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn admin_passes_both_guards() {
        let admin = principal(&[ROLE_USER, ROLE_ADMIN]);
        assert!(require_any_role(&admin, &[ROLE_ADMIN]).is_ok());
        assert!(require_any_role(&admin, &[ROLE_USER, ROLE_ADMIN]).is_ok());
    }

    #[test]
    fn user_is_denied_admin_guard() {
        let user = principal(&[ROLE_USER]);
        assert_matches!(
            require_any_role(&user, &[ROLE_ADMIN]),
            Err(AppError::Core(CoreError::Forbidden(_)))
        );
    }

    #[test]
    fn principal_without_roles_is_denied_everything() {
        let nobody = principal(&[]);
        assert!(require_any_role(&nobody, &[ROLE_USER, ROLE_ADMIN]).is_err());
    }
}
