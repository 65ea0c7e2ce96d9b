//! Dependencies for the expiry routines (using traits for testability)
//!
//! The store and clock are injected rather than reached through a
//! process-wide client, so tests can swap in the doubles from
//! `test_dependencies`.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::jobs::JobExpiryPolicy;
use crate::kernel::{BaseClock, BaseRecordStore, PgRecordStore, SystemClock};

#[derive(Clone)]
pub struct ExpiryDeps {
    pub store: Arc<dyn BaseRecordStore>,
    pub clock: Arc<dyn BaseClock>,
    pub job_policy: JobExpiryPolicy,
}

impl ExpiryDeps {
    pub fn new(
        store: Arc<dyn BaseRecordStore>,
        clock: Arc<dyn BaseClock>,
        job_policy: JobExpiryPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            job_policy,
        }
    }

    /// Production wiring: Postgres store over `pool`, wall-clock time.
    pub fn from_pool(pool: PgPool, job_policy: JobExpiryPolicy) -> Self {
        Self::new(
            Arc::new(PgRecordStore::new(pool)),
            Arc::new(SystemClock),
            job_policy,
        )
    }
}
