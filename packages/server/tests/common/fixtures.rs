//! Test fixtures for creating test data through the model methods.

use anyhow::Result;
use chrono::{DateTime, Utc};
use railhub_core::common::{AdvisoryId, JobId};
use railhub_core::domains::advisories::{AdvisoryType, NewAdvisory, ServiceAdvisory};
use railhub_core::domains::jobs::{Job, NewJob};
use sqlx::PgPool;
use uuid::Uuid;

/// Create an active job posting
pub async fn create_job(
    pool: &PgPool,
    title: &str,
    posted_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) -> Result<JobId> {
    let new = NewJob {
        expires_at,
        ..NewJob::builder()
            .title(title)
            .company("Test Railroad")
            .city("Galesburg")
            .state("IL")
            .description("Fixture posting")
            .apply_url("https://careers.example.com/apply")
            .posted_at(posted_at)
            .build()
    };

    let job = Job::create(new, pool).await?;
    Ok(job.id)
}

/// Create an active service advisory
pub async fn create_advisory(
    pool: &PgPool,
    title: &str,
    expires_at: Option<DateTime<Utc>>,
) -> Result<AdvisoryId> {
    let new = NewAdvisory {
        expires_at,
        ..NewAdvisory::builder()
            .external_id(Uuid::new_v4().to_string())
            .railroad("CSX")
            .advisory_type(AdvisoryType::Embargo)
            .title(title)
            .affected_area("Chicago Terminal")
            .issued_at(Utc::now())
            .build()
    };

    let advisory = ServiceAdvisory::create(new, pool).await?;
    Ok(advisory.id)
}
