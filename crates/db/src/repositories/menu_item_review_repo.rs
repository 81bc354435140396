//! Repository for the `ucsb_menu_item_reviews` table.

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::PgPool;

use super::CrudRepository;
use crate::models::menu_item_review::{CreateMenuItemReview, UcsbMenuItemReview};

/// Column list for `ucsb_menu_item_reviews` queries.
const COLUMNS: &str = "id, item_id, reviewer_email, stars, date_reviewed, comments";

/// Provides data access for menu item reviews.
pub struct MenuItemReviewRepo {
    pool: PgPool,
}

impl MenuItemReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for MenuItemReviewRepo {
    type Entity = UcsbMenuItemReview;
    type Key = DbId;
    type New = CreateMenuItemReview;

    async fn find_all(&self) -> Result<Vec<UcsbMenuItemReview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_menu_item_reviews ORDER BY id");
        sqlx::query_as::<_, UcsbMenuItemReview>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: &DbId) -> Result<Option<UcsbMenuItemReview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_menu_item_reviews WHERE id = $1");
        sqlx::query_as::<_, UcsbMenuItemReview>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &CreateMenuItemReview) -> Result<UcsbMenuItemReview, sqlx::Error> {
        let query = format!(
            "INSERT INTO ucsb_menu_item_reviews \
                 (item_id, reviewer_email, stars, date_reviewed, comments) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbMenuItemReview>(&query)
            .bind(input.item_id)
            .bind(&input.reviewer_email)
            .bind(input.stars)
            .bind(input.date_reviewed)
            .bind(&input.comments)
            .fetch_one(&self.pool)
            .await
    }

    /// Upsert keyed on `id`.
    async fn save(&self, review: &UcsbMenuItemReview) -> Result<UcsbMenuItemReview, sqlx::Error> {
        let query = format!(
            "INSERT INTO ucsb_menu_item_reviews \
                 (id, item_id, reviewer_email, stars, date_reviewed, comments) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 item_id = EXCLUDED.item_id, \
                 reviewer_email = EXCLUDED.reviewer_email, \
                 stars = EXCLUDED.stars, \
                 date_reviewed = EXCLUDED.date_reviewed, \
                 comments = EXCLUDED.comments \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbMenuItemReview>(&query)
            .bind(review.id)
            .bind(review.item_id)
            .bind(&review.reviewer_email)
            .bind(review.stars)
            .bind(review.date_reviewed)
            .bind(&review.comments)
            .fetch_one(&self.pool)
            .await
    }
}
