//! In-memory repository backend.
//!
//! Rows live in an insertion-ordered map behind an async `RwLock`. Every trait
//! call is counted so tests can assert how many reads and writes a handler
//! issued. Seeding and snapshot helpers do not touch the counters.

use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use campus_core::types::DbId;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::menu_item_review::{CreateMenuItemReview, UcsbMenuItemReview};
use crate::models::organization::{CreateOrganization, UcsbOrganization};
use crate::models::recommendation_request::{
    CreateRecommendationRequest, RecommendationRequest,
};
use crate::models::user::{CreateUser, User};
use crate::repositories::{CrudRepository, Repositories, UserRepository};

/// A stored entity that knows its own key.
pub trait Record: Clone + Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Send + Sync + 'static;

    fn key(&self) -> Self::Key;

    /// The server-generated id, for resources that have one.
    fn generated_id(&self) -> Option<DbId> {
        None
    }
}

/// Builds a record from its create DTO. `id` is the next free generated id;
/// natural-key records ignore it.
pub trait FromNew<N>: Record {
    fn build(id: DbId, input: &N) -> Self;
}

impl Record for UcsbMenuItemReview {
    type Key = DbId;

    fn key(&self) -> DbId {
        self.id
    }

    fn generated_id(&self) -> Option<DbId> {
        Some(self.id)
    }
}

impl FromNew<CreateMenuItemReview> for UcsbMenuItemReview {
    fn build(id: DbId, input: &CreateMenuItemReview) -> Self {
        UcsbMenuItemReview::from_new(id, input)
    }
}

impl Record for RecommendationRequest {
    type Key = DbId;

    fn key(&self) -> DbId {
        self.id
    }

    fn generated_id(&self) -> Option<DbId> {
        Some(self.id)
    }
}

impl FromNew<CreateRecommendationRequest> for RecommendationRequest {
    fn build(id: DbId, input: &CreateRecommendationRequest) -> Self {
        RecommendationRequest::from_new(id, input)
    }
}

impl Record for UcsbOrganization {
    type Key = String;

    fn key(&self) -> String {
        self.org_code.clone()
    }
}

impl FromNew<CreateOrganization> for UcsbOrganization {
    fn build(_id: DbId, input: &CreateOrganization) -> Self {
        UcsbOrganization::from(input)
    }
}

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    find_all: AtomicUsize,
    find_by_id: AtomicUsize,
    create: AtomicUsize,
    save: AtomicUsize,
}

impl CallCounts {
    pub fn find_all(&self) -> usize {
        self.find_all.load(Ordering::SeqCst)
    }

    pub fn find_by_id(&self) -> usize {
        self.find_by_id.load(Ordering::SeqCst)
    }

    pub fn create(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    pub fn save(&self) -> usize {
        self.save.load(Ordering::SeqCst)
    }

    /// Total writes (`create` + `save`).
    pub fn writes(&self) -> usize {
        self.create() + self.save()
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Generic in-memory table for any [`Record`].
pub struct MemoryRepo<E: Record, N> {
    rows: RwLock<IndexMap<E::Key, E>>,
    next_id: AtomicI64,
    calls: CallCounts,
    _new: PhantomData<fn(&N)>,
}

pub type MemoryMenuItemReviewRepo = MemoryRepo<UcsbMenuItemReview, CreateMenuItemReview>;
pub type MemoryRecommendationRequestRepo =
    MemoryRepo<RecommendationRequest, CreateRecommendationRequest>;
pub type MemoryOrganizationRepo = MemoryRepo<UcsbOrganization, CreateOrganization>;

impl<E: Record, N> Default for MemoryRepo<E, N> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(IndexMap::new()),
            next_id: AtomicI64::new(1),
            calls: CallCounts::default(),
            _new: PhantomData,
        }
    }
}

impl<E: Record, N> MemoryRepo<E, N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    /// Store rows directly, bypassing the counters.
    pub async fn seed(&self, records: impl IntoIterator<Item = E>) {
        let mut rows = self.rows.write().await;
        for record in records {
            self.reserve_id(&record);
            rows.insert(record.key(), record);
        }
    }

    /// Current contents in storage order, bypassing the counters.
    pub async fn snapshot(&self) -> Vec<E> {
        self.rows.read().await.values().cloned().collect()
    }

    /// Keep the id generator ahead of any explicitly stored id.
    fn reserve_id(&self, record: &E) {
        if let Some(id) = record.generated_id() {
            self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl<E, N> CrudRepository for MemoryRepo<E, N>
where
    E: FromNew<N>,
    N: Send + Sync,
{
    type Entity = E;
    type Key = E::Key;
    type New = N;

    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        CallCounts::bump(&self.calls.find_all);
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, key: &E::Key) -> Result<Option<E>, sqlx::Error> {
        CallCounts::bump(&self.calls.find_by_id);
        Ok(self.rows.read().await.get(key).cloned())
    }

    async fn create(&self, input: &N) -> Result<E, sqlx::Error> {
        CallCounts::bump(&self.calls.create);
        let mut rows = self.rows.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = E::build(id, input);
        rows.insert(record.key(), record.clone());
        Ok(record)
    }

    async fn save(&self, entity: &E) -> Result<E, sqlx::Error> {
        CallCounts::bump(&self.calls.save);
        self.reserve_id(entity);
        // `insert` on an existing key keeps the original position.
        self.rows
            .write()
            .await
            .insert(entity.key(), entity.clone());
        Ok(entity.clone())
    }
}

/// In-memory user accounts.
#[derive(Default)]
pub struct MemoryUserRepo {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == input.username) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate username '{}' violates uq_users_username",
                input.username
            )));
        }
        let user = User {
            id: users.last().map_or(1, |u| u.id + 1),
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            is_admin: input.is_admin,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// Concrete in-memory repositories, kept typed so callers can seed them and
/// read their call counters.
#[derive(Clone, Default)]
pub struct MemoryRepositories {
    pub menu_item_reviews: Arc<MemoryMenuItemReviewRepo>,
    pub recommendation_requests: Arc<MemoryRecommendationRequestRepo>,
    pub organizations: Arc<MemoryOrganizationRepo>,
    pub users: Arc<MemoryUserRepo>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-erased handles for the API layer.
    pub fn repositories(&self) -> Repositories {
        Repositories {
            menu_item_reviews: self.menu_item_reviews.clone(),
            recommendation_requests: self.recommendation_requests.clone(),
            organizations: self.organizations.clone(),
            users: self.users.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().expect("valid timestamp")
    }

    fn new_review(stars: i32) -> CreateMenuItemReview {
        CreateMenuItemReview {
            item_id: 1,
            stars,
            reviewer_email: "email@ucsb.edu".into(),
            date_reviewed: at("2022-01-03T00:00:00"),
            comments: "some-comment".into(),
        }
    }

    fn org(code: &str, short: &str) -> UcsbOrganization {
        UcsbOrganization {
            org_code: code.into(),
            org_translation_short: short.into(),
            org_translation: format!("{short} AT UCSB"),
            inactive: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = MemoryMenuItemReviewRepo::new();

        let first = repo.create(&new_review(3)).await.unwrap();
        let second = repo.create(&new_review(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.calls().create(), 2);
        assert_eq!(repo.calls().save(), 0);
    }

    #[tokio::test]
    async fn create_skips_seeded_ids() {
        let repo = MemoryMenuItemReviewRepo::new();
        repo.seed([UcsbMenuItemReview::from_new(7, &new_review(5))]).await;

        let created = repo.create(&new_review(1)).await.unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(repo.calls().create(), 1, "seeding is not counted");
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = MemoryOrganizationRepo::new();
        repo.seed([org("ZPR", "ZETA PHI RHO"), org("SKY", "SKYDIVING CLUB")])
            .await;

        let all = repo.find_all().await.unwrap();
        let codes: Vec<_> = all.iter().map(|o| o.org_code.as_str()).collect();

        assert_eq!(codes, ["ZPR", "SKY"]);
        assert_eq!(repo.calls().find_all(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_in_place() {
        let repo = MemoryOrganizationRepo::new();
        repo.seed([org("ZPR", "ZETA PHI RHO"), org("SKY", "SKYDIVING CLUB")])
            .await;

        let mut edited = org("ZPR", "ZETA PHI RHO FRAT");
        edited.inactive = true;
        repo.save(&edited).await.unwrap();

        let rows = repo.snapshot().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], edited);
        assert_eq!(repo.calls().save(), 1);
    }

    #[tokio::test]
    async fn natural_key_create_replaces_existing_row() {
        let repo = MemoryOrganizationRepo::new();
        repo.seed([org("OSLI", "STUDENT")]).await;

        let input = CreateOrganization {
            org_code: "OSLI".into(),
            org_translation_short: "STUDENT LIFE".into(),
            org_translation: "OFFICE OF STUDENT LIFE".into(),
            inactive: true,
        };
        repo.create(&input).await.unwrap();

        let rows = repo.snapshot().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].org_translation_short, "STUDENT LIFE");
    }

    #[tokio::test]
    async fn find_by_id_misses_cleanly() {
        let repo = MemoryRecommendationRequestRepo::new();
        assert!(repo.find_by_id(&42).await.unwrap().is_none());
        assert_eq!(repo.calls().find_by_id(), 1);
        assert_eq!(repo.calls().writes(), 0);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = MemoryUserRepo::new();
        let input = CreateUser {
            username: "admin".into(),
            email: "admin@ucsb.edu".into(),
            password_hash: "hash".into(),
            is_admin: true,
        };

        let created = repo.create(&input).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(repo.create(&input).await.is_err());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
