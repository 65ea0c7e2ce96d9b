//! Expire service advisories past their expiry date.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::common::{ExpiryError, RecordKind};
use crate::kernel::{BaseClock, BaseRecordStore, ExpiryDeps, ExpiryPredicate};

/// Deactivate every live advisory whose `expires_at` has passed.
///
/// Advisories without an expiry date are never touched here. Store failures
/// are returned to the caller, same as the job routine.
pub async fn expire_old_advisories(deps: &ExpiryDeps) -> Result<u64, ExpiryError> {
    let now = deps.clock.now();
    expire_old_advisories_at(deps.store.as_ref(), now).await
}

/// Same as [`expire_old_advisories`] with an explicit `now`.
pub async fn expire_old_advisories_at(
    store: &dyn BaseRecordStore,
    now: DateTime<Utc>,
) -> Result<u64, ExpiryError> {
    let expired_count = store
        .deactivate_matching(RecordKind::Advisory, &ExpiryPredicate::expires_before(now))
        .await
        .map_err(|e| ExpiryError::store(RecordKind::Advisory, e))?;

    info!(expired_count, now = %now, "Sweep: expired service advisories");
    Ok(expired_count)
}
