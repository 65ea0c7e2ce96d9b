// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. Expiry policy (which records qualify
// and when) lives in the domain activities that call through them.
//
// Naming convention: Base* for trait names (e.g., BaseRecordStore, BaseClock)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{RecordKind, StoreError};

// =============================================================================
// Expiry predicate
// =============================================================================

/// Filter for a bulk deactivation: `is_active AND (expires_at < now OR
/// posted_at < posted_before)`.
///
/// `posted_before` is only set for job postings; advisories expire on their
/// explicit date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPredicate {
    pub now: DateTime<Utc>,
    pub posted_before: Option<DateTime<Utc>>,
}

impl ExpiryPredicate {
    /// Match records whose `expires_at` is strictly before `now`.
    pub fn expires_before(now: DateTime<Utc>) -> Self {
        Self {
            now,
            posted_before: None,
        }
    }

    /// Also match records posted strictly before `cutoff`.
    pub fn or_posted_before(mut self, cutoff: DateTime<Utc>) -> Self {
        self.posted_before = Some(cutoff);
        self
    }

    /// Evaluate the predicate against one record.
    ///
    /// Stores that can't push the filter down (the in-memory test store) use
    /// this; the Postgres store expresses the same thing in SQL.
    pub fn matches(
        &self,
        is_active: bool,
        posted_at: Option<DateTime<Utc>>,
        expires_at: Option<DateTime<Utc>>,
    ) -> bool {
        if !is_active {
            return false;
        }

        let past_expiry = expires_at.is_some_and(|at| at < self.now);
        let too_old = match (self.posted_before, posted_at) {
            (Some(cutoff), Some(posted)) => posted < cutoff,
            _ => false,
        };

        past_expiry || too_old
    }
}

// =============================================================================
// Record Store Trait (Infrastructure - bulk conditional update)
// =============================================================================

#[async_trait]
pub trait BaseRecordStore: Send + Sync {
    /// Set `is_active = false` on every record of `kind` matching `predicate`
    /// in one atomic operation. Returns the number of records transitioned.
    async fn deactivate_matching(
        &self,
        kind: RecordKind,
        predicate: &ExpiryPredicate,
    ) -> Result<u64, StoreError>;
}

// =============================================================================
// Clock Trait (Infrastructure - time source)
// =============================================================================

pub trait BaseClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl BaseClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
