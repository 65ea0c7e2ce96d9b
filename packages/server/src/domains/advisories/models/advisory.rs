use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::AdvisoryId;
use crate::domains::advisories::slug::generate_advisory_slug;
use crate::kernel::ExpiryPredicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "advisory_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryType {
    Embargo,
    ServiceAlert,
    WeatherAdvisory,
    MaintenanceNotice,
}

impl std::fmt::Display for AdvisoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryType::Embargo => write!(f, "embargo"),
            AdvisoryType::ServiceAlert => write!(f, "service_alert"),
            AdvisoryType::WeatherAdvisory => write!(f, "weather_advisory"),
            AdvisoryType::MaintenanceNotice => write!(f, "maintenance_notice"),
        }
    }
}

/// Service advisory - SQL persistence layer
///
/// Advisories without `expires_at` stay live until an operator takes them
/// down; there is no age-based fallback.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceAdvisory {
    pub id: AdvisoryId,
    pub slug: String,
    pub external_id: String,
    pub railroad: String,
    pub advisory_type: AdvisoryType,

    pub title: String,
    pub description: String,
    pub affected_area: Option<String>,

    pub is_active: bool,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewAdvisory {
    pub external_id: String,
    pub railroad: String,
    pub advisory_type: AdvisoryType,
    pub title: String,
    #[builder(default)]
    pub description: String,
    #[builder(default, setter(strip_option))]
    pub affected_area: Option<String>,
    pub issued_at: DateTime<Utc>,
    #[builder(default, setter(strip_option))]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ServiceAdvisory {
    /// Insert a new active advisory
    pub async fn create(new: NewAdvisory, pool: &PgPool) -> Result<Self> {
        let slug = generate_advisory_slug(&new.title, &new.railroad);

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO service_advisories (
                id, slug, external_id, railroad, advisory_type, title,
                description, affected_area, is_active, issued_at, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, true, $9, $10)
            RETURNING *
            "#,
        )
        .bind(AdvisoryId::new())
        .bind(slug)
        .bind(&new.external_id)
        .bind(&new.railroad)
        .bind(new.advisory_type)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.affected_area)
        .bind(new.issued_at)
        .bind(new.expires_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find advisory by ID
    pub async fn find_by_id(id: AdvisoryId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM service_advisories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Live advisories for one railroad, newest first
    pub async fn find_active_by_railroad(railroad: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM service_advisories
             WHERE railroad = $1 AND is_active = true
             ORDER BY issued_at DESC",
        )
        .bind(railroad)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Deactivate every live advisory whose `expires_at` is before
    /// `predicate.now`. The age cutoff does not apply to advisories.
    pub async fn deactivate_matching(
        predicate: &ExpiryPredicate,
        pool: &PgPool,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE service_advisories
            SET is_active = false, updated_at = NOW()
            WHERE is_active = true
              AND expires_at < $1
            "#,
        )
        .bind(predicate.now)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
