//! Repository layer.
//!
//! Each resource is reached through [`CrudRepository`], an object-safe trait so
//! handlers can run against PostgreSQL in production and the in-memory store
//! in [`crate::memory`] under test. The PostgreSQL implementations hold a
//! cloned [`PgPool`](sqlx::PgPool).

use std::sync::Arc;

use async_trait::async_trait;
use campus_core::types::DbId;

use crate::models::menu_item_review::{CreateMenuItemReview, UcsbMenuItemReview};
use crate::models::organization::{CreateOrganization, UcsbOrganization};
use crate::models::recommendation_request::{
    CreateRecommendationRequest, RecommendationRequest,
};
use crate::models::user::{CreateUser, User};
use crate::DbPool;

pub mod menu_item_review_repo;
pub mod organization_repo;
pub mod recommendation_request_repo;
pub mod user_repo;

pub use menu_item_review_repo::MenuItemReviewRepo;
pub use organization_repo::OrganizationRepo;
pub use recommendation_request_repo::RecommendationRequestRepo;
pub use user_repo::UserRepo;

/// Persistence contract shared by every CRUD resource.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// The stored record.
    type Entity: Send + Sync;
    /// Lookup key: a generated id or a natural key.
    type Key: Send + Sync;
    /// Caller-supplied fields for a new record.
    type New: Send + Sync;

    /// Every record, in storage order.
    async fn find_all(&self) -> Result<Vec<Self::Entity>, sqlx::Error>;

    async fn find_by_id(&self, key: &Self::Key) -> Result<Option<Self::Entity>, sqlx::Error>;

    /// Insert a new record. Generated-id resources assign the id here;
    /// natural-key resources behave like [`save`](Self::save).
    async fn create(&self, input: &Self::New) -> Result<Self::Entity, sqlx::Error>;

    /// Insert the record if its key is new, overwrite it otherwise.
    async fn save(&self, entity: &Self::Entity) -> Result<Self::Entity, sqlx::Error>;
}

pub type MenuItemReviewRepository =
    dyn CrudRepository<Entity = UcsbMenuItemReview, Key = DbId, New = CreateMenuItemReview>;

pub type RecommendationRequestRepository = dyn CrudRepository<
    Entity = RecommendationRequest,
    Key = DbId,
    New = CreateRecommendationRequest,
>;

pub type OrganizationRepository =
    dyn CrudRepository<Entity = UcsbOrganization, Key = String, New = CreateOrganization>;

/// Account storage backing login and user administration.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, sqlx::Error>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error>;
}

/// The full set of repositories handed to the API layer.
#[derive(Clone)]
pub struct Repositories {
    pub menu_item_reviews: Arc<MenuItemReviewRepository>,
    pub recommendation_requests: Arc<RecommendationRequestRepository>,
    pub organizations: Arc<OrganizationRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            menu_item_reviews: Arc::new(MenuItemReviewRepo::new(pool.clone())),
            recommendation_requests: Arc::new(RecommendationRequestRepo::new(pool.clone())),
            organizations: Arc::new(OrganizationRepo::new(pool.clone())),
            users: Arc::new(UserRepo::new(pool.clone())),
        }
    }
}
