//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires `ROLE_ADMIN`.
//! - [`rbac::RequireUser`] -- Requires `ROLE_USER` or `ROLE_ADMIN`.

pub mod auth;
pub mod rbac;
