//! Repository for the `ucsb_organizations` table.
//!
//! Rows are keyed by the caller-supplied `org_code`, so `create` and `save`
//! are the same upsert.

use async_trait::async_trait;
use sqlx::PgPool;

use super::CrudRepository;
use crate::models::organization::{CreateOrganization, UcsbOrganization};

const COLUMNS: &str = "org_code, org_translation_short, org_translation, inactive";

pub struct OrganizationRepo {
    pool: PgPool,
}

impl OrganizationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for OrganizationRepo {
    type Entity = UcsbOrganization;
    type Key = String;
    type New = CreateOrganization;

    async fn find_all(&self) -> Result<Vec<UcsbOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_organizations ORDER BY org_code");
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, org_code: &String) -> Result<Option<UcsbOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_organizations WHERE org_code = $1");
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .bind(org_code)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &CreateOrganization) -> Result<UcsbOrganization, sqlx::Error> {
        self.save(&UcsbOrganization::from(input)).await
    }

    async fn save(&self, org: &UcsbOrganization) -> Result<UcsbOrganization, sqlx::Error> {
        let query = format!(
            "INSERT INTO ucsb_organizations \
                 (org_code, org_translation_short, org_translation, inactive) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (org_code) DO UPDATE SET \
                 org_translation_short = EXCLUDED.org_translation_short, \
                 org_translation = EXCLUDED.org_translation, \
                 inactive = EXCLUDED.inactive \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .bind(&org.org_code)
            .bind(&org.org_translation_short)
            .bind(&org.org_translation)
            .bind(org.inactive)
            .fetch_one(&self.pool)
            .await
    }
}
