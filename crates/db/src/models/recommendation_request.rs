//! Letters of recommendation requested from professors.

use campus_core::types::{DbId, LocalDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ENTITY_NAME: &str = "RecommendationRequest";

/// A row from the `recommendation_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: DbId,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: LocalDateTime,
    pub date_needed: LocalDateTime,
    pub done: bool,
}

/// Query parameters for `POST /api/recommendationrequests/post`.
///
/// Older clients spell the requester parameter `requestorEmail`; both are
/// accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequest {
    #[serde(alias = "requestorEmail")]
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: LocalDateTime,
    pub date_needed: LocalDateTime,
    pub done: bool,
}

/// Replacement body for `PUT /api/recommendationrequests?id=`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecommendationRequest {
    #[serde(alias = "requestorEmail")]
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: LocalDateTime,
    pub date_needed: LocalDateTime,
    pub done: bool,
}

impl RecommendationRequest {
    pub fn from_new(id: DbId, input: &CreateRecommendationRequest) -> Self {
        Self {
            id,
            requester_email: input.requester_email.clone(),
            professor_email: input.professor_email.clone(),
            explanation: input.explanation.clone(),
            date_requested: input.date_requested,
            date_needed: input.date_needed,
            done: input.done,
        }
    }

    pub fn apply(&mut self, input: UpdateRecommendationRequest) {
        self.requester_email = input.requester_email;
        self.professor_email = input.professor_email;
        self.explanation = input.explanation;
        self.date_requested = input.date_requested;
        self.date_needed = input.date_needed;
        self.done = input.done;
    }
}
