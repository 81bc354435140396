//! Student organizations, keyed by their short organization code.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const ENTITY_NAME: &str = "UCSBOrganization";

/// A row from the `ucsb_organizations` table. `org_code` is the primary key.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Query parameters for `POST /api/ucsborganization/post`.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganization {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Replacement body for `PUT /api/ucsborganization?orgCode=`.
///
/// The key comes from the query string; an `orgCode` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl From<&CreateOrganization> for UcsbOrganization {
    fn from(input: &CreateOrganization) -> Self {
        Self {
            org_code: input.org_code.clone(),
            org_translation_short: input.org_translation_short.clone(),
            org_translation: input.org_translation.clone(),
            inactive: input.inactive,
        }
    }
}

impl UcsbOrganization {
    pub fn apply(&mut self, input: UpdateOrganization) {
        self.org_translation_short = input.org_translation_short;
        self.org_translation = input.org_translation;
        self.inactive = input.inactive;
    }
}
