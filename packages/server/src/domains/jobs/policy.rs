use chrono::{DateTime, Duration, Utc};

use crate::kernel::ExpiryPredicate;

/// Postings older than this are taken down even without an explicit expiry.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 45;

/// When a job posting stops being live.
///
/// A posting expires once its `expires_at` has passed, or once it was posted
/// more than `max_age` ago, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobExpiryPolicy {
    pub max_age: Duration,
}

impl JobExpiryPolicy {
    pub fn new(max_age: Duration) -> Self {
        Self { max_age }
    }

    pub fn with_max_age_days(days: i64) -> Self {
        Self::new(Duration::days(days))
    }

    /// Postings made strictly before this instant are too old.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.max_age
    }

    /// Store filter for a run at `now`. Both conditions see the same `now`.
    pub fn predicate(&self, now: DateTime<Utc>) -> ExpiryPredicate {
        ExpiryPredicate::expires_before(now).or_posted_before(self.cutoff(now))
    }
}

impl Default for JobExpiryPolicy {
    fn default() -> Self {
        Self::with_max_age_days(DEFAULT_MAX_AGE_DAYS)
    }
}
