use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{RecordKind, StoreError};
use crate::domains::advisories::models::ServiceAdvisory;
use crate::domains::jobs::models::Job;
use crate::kernel::{BaseRecordStore, ExpiryPredicate};

/// Record store backed by the `jobs` and `service_advisories` tables.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseRecordStore for PgRecordStore {
    async fn deactivate_matching(
        &self,
        kind: RecordKind,
        predicate: &ExpiryPredicate,
    ) -> Result<u64, StoreError> {
        let rows_affected = match kind {
            RecordKind::Job => Job::deactivate_matching(predicate, &self.pool).await?,
            RecordKind::Advisory => {
                ServiceAdvisory::deactivate_matching(predicate, &self.pool).await?
            }
        };

        Ok(rows_affected)
    }
}
