//! Expire job postings past their expiry date or older than the max age.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::common::{ExpiryError, RecordKind};
use crate::domains::jobs::JobExpiryPolicy;
use crate::kernel::{BaseClock, BaseRecordStore, ExpiryDeps};

/// Deactivate every live posting whose `expires_at` has passed or that was
/// posted more than `deps.job_policy.max_age` ago.
///
/// `now` is read from the injected clock once and used for both conditions.
/// Store failures are returned to the caller.
pub async fn expire_old_jobs(deps: &ExpiryDeps) -> Result<u64, ExpiryError> {
    let now = deps.clock.now();
    expire_old_jobs_at(deps.store.as_ref(), &deps.job_policy, now).await
}

/// Same as [`expire_old_jobs`] with an explicit `now`.
pub async fn expire_old_jobs_at(
    store: &dyn BaseRecordStore,
    policy: &JobExpiryPolicy,
    now: DateTime<Utc>,
) -> Result<u64, ExpiryError> {
    let predicate = policy.predicate(now);

    let expired_count = store
        .deactivate_matching(RecordKind::Job, &predicate)
        .await
        .map_err(|e| ExpiryError::store(RecordKind::Job, e))?;

    info!(
        expired_count,
        now = %now,
        cutoff = %policy.cutoff(now),
        "Sweep: expired job postings"
    );
    Ok(expired_count)
}
