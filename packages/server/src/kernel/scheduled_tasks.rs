//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! Two periodic maintenance tasks run on independent schedules:
//! - Job posting expiry (past `expires_at` or older than the max age)
//! - Service advisory expiry (past `expires_at`)
//!
//! # Architecture
//!
//! ```text
//! Scheduler (JOB_EXPIRY_SCHEDULE)
//!     └─► expire_old_jobs()        ── one bulk UPDATE on jobs
//!
//! Scheduler (ADVISORY_EXPIRY_SCHEDULE)
//!     └─► expire_old_advisories()  ── one bulk UPDATE on service_advisories
//! ```
//!
//! The routines propagate store failures. This is the layer that logs them
//! and waits for the next tick; there is no retry in between.

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::advisories::activities::expire_old_advisories;
use crate::domains::jobs::activities::expire_old_jobs;
use crate::kernel::ExpiryDeps;

/// Default cron expression for job expiry: quarter past every hour.
pub const DEFAULT_JOB_EXPIRY_SCHEDULE: &str = "0 15 * * * *";

/// Default cron expression for advisory expiry: quarter to every hour.
pub const DEFAULT_ADVISORY_EXPIRY_SCHEDULE: &str = "0 45 * * * *";

/// Six-field cron expressions (seconds first) for each task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirySchedules {
    pub jobs: String,
    pub advisories: String,
}

/// Start all scheduled tasks
pub async fn start_scheduler(deps: ExpiryDeps, schedules: &ExpirySchedules) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job_deps = deps.clone();
    let job_expiry = Job::new_async(schedules.jobs.as_str(), move |_uuid, _lock| {
        let deps = job_deps.clone();
        Box::pin(async move {
            match expire_old_jobs(&deps).await {
                Ok(expired_count) => {
                    tracing::info!(expired_count, "Scheduled job expiry complete")
                }
                Err(e) => tracing::error!(error = %e, "Scheduled job expiry failed"),
            }
        })
    })?;

    scheduler.add(job_expiry).await?;

    let advisory_deps = deps.clone();
    let advisory_expiry = Job::new_async(schedules.advisories.as_str(), move |_uuid, _lock| {
        let deps = advisory_deps.clone();
        Box::pin(async move {
            match expire_old_advisories(&deps).await {
                Ok(expired_count) => {
                    tracing::info!(expired_count, "Scheduled advisory expiry complete")
                }
                Err(e) => tracing::error!(error = %e, "Scheduled advisory expiry failed"),
            }
        })
    })?;

    scheduler.add(advisory_expiry).await?;
    scheduler.start().await?;

    tracing::info!(
        job_schedule = %schedules.jobs,
        advisory_schedule = %schedules.advisories,
        max_job_age_days = deps.job_policy.max_age.num_days(),
        "Scheduled expiry tasks started"
    );
    Ok(scheduler)
}
