//! Dining-commons menu item reviews.

use campus_core::types::{DbId, LocalDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Display name used in lookups and "not found" messages.
pub const ENTITY_NAME: &str = "UCSBMenuItemReview";

/// A row from the `ucsb_menu_item_reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbMenuItemReview {
    pub id: DbId,
    pub item_id: DbId,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: LocalDateTime,
    pub comments: String,
}

/// Query parameters for `POST /api/ucsbmenuitemreview/post`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemReview {
    pub item_id: DbId,
    pub stars: i32,
    pub reviewer_email: String,
    pub date_reviewed: LocalDateTime,
    pub comments: String,
}

/// Replacement body for `PUT /api/ucsbmenuitemreview?id=`.
///
/// Any `id` in the body is ignored; the query parameter decides which row
/// is replaced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemReview {
    pub item_id: DbId,
    pub stars: i32,
    pub reviewer_email: String,
    pub date_reviewed: LocalDateTime,
    pub comments: String,
}

impl UcsbMenuItemReview {
    pub fn from_new(id: DbId, input: &CreateMenuItemReview) -> Self {
        Self {
            id,
            item_id: input.item_id,
            reviewer_email: input.reviewer_email.clone(),
            stars: input.stars,
            date_reviewed: input.date_reviewed,
            comments: input.comments.clone(),
        }
    }

    /// Overwrite every mutable field, keeping `id`.
    pub fn apply(&mut self, input: UpdateMenuItemReview) {
        self.item_id = input.item_id;
        self.reviewer_email = input.reviewer_email;
        self.stars = input.stars;
        self.date_reviewed = input.date_reviewed;
        self.comments = input.comments;
    }
}
