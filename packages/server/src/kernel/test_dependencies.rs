// TestDependencies - in-memory doubles for the expiry routines
//
// Provides a record store, a failing store and a settable clock that can be
// injected through ExpiryDeps in unit and integration tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseClock, BaseRecordStore, ExpiryDeps, ExpiryPredicate};
use crate::common::{RecordKind, StoreError};
use crate::domains::jobs::JobExpiryPolicy;

// =============================================================================
// In-memory record store
// =============================================================================

/// One stored record: just the fields the expiry predicates look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub kind: RecordKind,
    pub is_active: bool,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<Vec<StoredRecord>>>,
    calls: Arc<Mutex<Vec<(RecordKind, ExpiryPredicate)>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an active job posting.
    pub fn insert_job(&self, posted_at: DateTime<Utc>, expires_at: Option<DateTime<Utc>>) -> Uuid {
        self.insert(RecordKind::Job, Some(posted_at), expires_at)
    }

    /// Insert an active service advisory.
    pub fn insert_advisory(&self, expires_at: Option<DateTime<Utc>>) -> Uuid {
        self.insert(RecordKind::Advisory, None, expires_at)
    }

    fn insert(
        &self,
        kind: RecordKind,
        posted_at: Option<DateTime<Utc>>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.records.lock().unwrap().push(StoredRecord {
            id,
            kind,
            is_active: true,
            posted_at,
            expires_at,
        });
        id
    }

    pub fn is_active(&self, id: Uuid) -> Option<bool> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.is_active)
    }

    pub fn active_count(&self, kind: RecordKind) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind == kind && r.is_active)
            .count()
    }

    /// Predicates received so far, in call order.
    pub fn calls(&self) -> Vec<(RecordKind, ExpiryPredicate)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseRecordStore for InMemoryRecordStore {
    async fn deactivate_matching(
        &self,
        kind: RecordKind,
        predicate: &ExpiryPredicate,
    ) -> Result<u64, StoreError> {
        self.calls.lock().unwrap().push((kind, *predicate));

        // Single lock for the whole pass, so the update is atomic with
        // respect to concurrent callers.
        let mut records = self.records.lock().unwrap();
        let mut transitioned = 0;
        for record in records.iter_mut().filter(|r| r.kind == kind) {
            if predicate.matches(record.is_active, record.posted_at, record.expires_at) {
                record.is_active = false;
                transitioned += 1;
            }
        }

        Ok(transitioned)
    }
}

// =============================================================================
// Failing record store
// =============================================================================

/// Store that fails for the given record kinds and delegates the rest to an
/// in-memory store.
#[derive(Clone)]
pub struct FailingRecordStore {
    failing: Vec<RecordKind>,
    inner: InMemoryRecordStore,
}

impl FailingRecordStore {
    /// Fail every call.
    pub fn always() -> Self {
        Self {
            failing: vec![RecordKind::Job, RecordKind::Advisory],
            inner: InMemoryRecordStore::new(),
        }
    }

    /// Fail only calls for `kind`; serve others from `inner`.
    pub fn only(kind: RecordKind, inner: InMemoryRecordStore) -> Self {
        Self {
            failing: vec![kind],
            inner,
        }
    }
}

#[async_trait]
impl BaseRecordStore for FailingRecordStore {
    async fn deactivate_matching(
        &self,
        kind: RecordKind,
        predicate: &ExpiryPredicate,
    ) -> Result<u64, StoreError> {
        if self.failing.contains(&kind) {
            return Err(StoreError::Unavailable(format!(
                "simulated outage while updating {} records",
                kind
            )));
        }
        self.inner.deactivate_matching(kind, predicate).await
    }
}

// =============================================================================
// Fixed clock
// =============================================================================

#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl BaseClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// In-memory store plus fixed clock, wired into an `ExpiryDeps`.
pub struct TestDependencies {
    pub store: InMemoryRecordStore,
    pub clock: FixedClock,
    pub job_policy: JobExpiryPolicy,
}

impl TestDependencies {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            store: InMemoryRecordStore::new(),
            clock: FixedClock::new(now),
            job_policy: JobExpiryPolicy::default(),
        }
    }

    pub fn with_job_policy(mut self, job_policy: JobExpiryPolicy) -> Self {
        self.job_policy = job_policy;
        self
    }

    pub fn deps(&self) -> ExpiryDeps {
        ExpiryDeps::new(
            Arc::new(self.store.clone()),
            Arc::new(self.clock.clone()),
            self.job_policy,
        )
    }

    /// Same clock and policy, but every store call fails for `kind`.
    pub fn deps_failing_for(&self, kind: RecordKind) -> ExpiryDeps {
        ExpiryDeps::new(
            Arc::new(FailingRecordStore::only(kind, self.store.clone())),
            Arc::new(self.clock.clone()),
            self.job_policy,
        )
    }
}
