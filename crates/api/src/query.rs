//! Shared query parameter types for API handlers.

use campus_core::types::DbId;
use serde::Deserialize;

/// Lookup by generated id (`?id=`).
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}

/// Lookup by organization code (`?orgCode=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgCodeParams {
    pub org_code: String,
}
