use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::JobId;
use crate::domains::jobs::utils::{
    classify_job, generate_company_slug, generate_content_hash, generate_job_slug,
};
use crate::kernel::ExpiryPredicate;

/// Job posting - SQL persistence layer
///
/// Created active by the ingestion run; the expiry routine is the only thing
/// that flips `is_active` off. Rows are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,
    pub slug: String,

    // Content
    pub title: String,
    pub company: String,
    pub company_slug: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub category: Option<String>,
    pub description: String,
    pub apply_url: String,

    // Source tracking / dedup
    pub external_id: Option<String>,
    pub content_hash: Option<String>,

    // Lifecycle
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a scraped or seeded posting.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewJob {
    pub title: String,
    pub company: String,
    #[builder(default, setter(strip_option))]
    pub city: Option<String>,
    #[builder(default, setter(strip_option))]
    pub state: Option<String>,
    #[builder(default = "US".to_string())]
    pub country: String,
    /// Left unset, the category is inferred from title and description.
    #[builder(default, setter(strip_option))]
    pub category: Option<String>,
    #[builder(default)]
    pub description: String,
    pub apply_url: String,
    #[builder(default, setter(strip_option))]
    pub external_id: Option<String>,
    pub posted_at: DateTime<Utc>,
    #[builder(default, setter(strip_option))]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Insert a new active posting, deriving slug, company slug, content hash
    /// and (if missing) category.
    pub async fn create(new: NewJob, pool: &PgPool) -> Result<Self> {
        let slug = generate_job_slug(
            &new.title,
            &new.company,
            new.city.as_deref(),
            new.state.as_deref(),
        );
        let company_slug = generate_company_slug(&new.company);
        let content_hash = generate_content_hash(&new.title, &new.company, new.city.as_deref());
        let category = new
            .category
            .clone()
            .or_else(|| classify_job(&new.title, &new.description).map(str::to_string));

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO jobs (
                id, slug, title, company, company_slug, city, state, country,
                category, description, apply_url, external_id, content_hash,
                is_active, posted_at, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, true, $14, $15)
            RETURNING *
            "#,
        )
        .bind(JobId::new())
        .bind(slug)
        .bind(&new.title)
        .bind(&new.company)
        .bind(company_slug)
        .bind(&new.city)
        .bind(&new.state)
        .bind(&new.country)
        .bind(category)
        .bind(&new.description)
        .bind(&new.apply_url)
        .bind(&new.external_id)
        .bind(content_hash)
        .bind(new.posted_at)
        .bind(new.expires_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find posting by ID
    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find a posting by its content hash (cross-source duplicate check)
    pub async fn find_by_content_hash(content_hash: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE content_hash = $1 LIMIT 1")
            .bind(content_hash)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Deactivate every live posting matching `predicate` in one statement.
    ///
    /// `posted_at < NULL` is never true, so a predicate without an age cutoff
    /// only expires on `expires_at`.
    pub async fn deactivate_matching(
        predicate: &ExpiryPredicate,
        pool: &PgPool,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET is_active = false, updated_at = NOW()
            WHERE is_active = true
              AND (expires_at < $1 OR posted_at < $2)
            "#,
        )
        .bind(predicate.now)
        .bind(predicate.posted_before)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
