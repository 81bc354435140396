//! Repository for the `recommendation_requests` table.

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::PgPool;

use super::CrudRepository;
use crate::models::recommendation_request::{
    CreateRecommendationRequest, RecommendationRequest,
};

const COLUMNS: &str = "\
    id, requester_email, professor_email, explanation, \
    date_requested, date_needed, done";

pub struct RecommendationRequestRepo {
    pool: PgPool,
}

impl RecommendationRequestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for RecommendationRequestRepo {
    type Entity = RecommendationRequest;
    type Key = DbId;
    type New = CreateRecommendationRequest;

    async fn find_all(&self) -> Result<Vec<RecommendationRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recommendation_requests ORDER BY id");
        sqlx::query_as::<_, RecommendationRequest>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: &DbId) -> Result<Option<RecommendationRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recommendation_requests WHERE id = $1");
        sqlx::query_as::<_, RecommendationRequest>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(
        &self,
        input: &CreateRecommendationRequest,
    ) -> Result<RecommendationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO recommendation_requests \
                 (requester_email, professor_email, explanation, \
                  date_requested, date_needed, done) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecommendationRequest>(&query)
            .bind(&input.requester_email)
            .bind(&input.professor_email)
            .bind(&input.explanation)
            .bind(input.date_requested)
            .bind(input.date_needed)
            .bind(input.done)
            .fetch_one(&self.pool)
            .await
    }

    async fn save(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO recommendation_requests \
                 (id, requester_email, professor_email, explanation, \
                  date_requested, date_needed, done) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 requester_email = EXCLUDED.requester_email, \
                 professor_email = EXCLUDED.professor_email, \
                 explanation = EXCLUDED.explanation, \
                 date_requested = EXCLUDED.date_requested, \
                 date_needed = EXCLUDED.date_needed, \
                 done = EXCLUDED.done \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecommendationRequest>(&query)
            .bind(request.id)
            .bind(&request.requester_email)
            .bind(&request.professor_email)
            .bind(&request.explanation)
            .bind(request.date_requested)
            .bind(request.date_needed)
            .bind(request.done)
            .fetch_one(&self.pool)
            .await
    }
}
