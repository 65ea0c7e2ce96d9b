//! Run both expiry routines and report each outcome separately.
//!
//! The routines themselves propagate store failures. A sweep is the place
//! that absorbs them: a failed job expiry is logged and recorded, and the
//! advisory expiry still runs. The report keeps "failed" distinct from
//! "nothing expired".

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::ExpiryError;
use crate::domains::advisories::activities::expire_old_advisories_at;
use crate::domains::jobs::activities::expire_old_jobs_at;
use crate::kernel::{BaseClock, ExpiryDeps};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoutineOutcome {
    Expired { count: u64 },
    Failed { error: String },
}

impl RoutineOutcome {
    fn from_result(result: Result<u64, ExpiryError>) -> Self {
        match result {
            Ok(count) => RoutineOutcome::Expired { count },
            Err(e) => {
                tracing::error!(kind = %e.kind(), error = %e, "Expiry routine failed");
                RoutineOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn expired_count(&self) -> u64 {
        match self {
            RoutineOutcome::Expired { count } => *count,
            RoutineOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RoutineOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub ran_at: DateTime<Utc>,
    pub jobs: RoutineOutcome,
    pub advisories: RoutineOutcome,
}

impl SweepReport {
    pub fn total_expired(&self) -> u64 {
        self.jobs.expired_count() + self.advisories.expired_count()
    }

    pub fn has_failures(&self) -> bool {
        self.jobs.is_failed() || self.advisories.is_failed()
    }
}

/// Expire jobs, then advisories, both against one snapshot of `now`.
pub async fn run_expiry_sweep(deps: &ExpiryDeps) -> SweepReport {
    let now = deps.clock.now();
    let store = deps.store.as_ref();

    let jobs = RoutineOutcome::from_result(expire_old_jobs_at(store, &deps.job_policy, now).await);
    let advisories = RoutineOutcome::from_result(expire_old_advisories_at(store, now).await);

    let report = SweepReport {
        ran_at: now,
        jobs,
        advisories,
    };

    tracing::info!(
        total_expired = report.total_expired(),
        has_failures = report.has_failures(),
        "Expiry sweep complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RecordKind;
    use crate::kernel::TestDependencies;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-10-19T09:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_reports_both_counts() {
        let test = TestDependencies::new(now());
        test.store.insert_job(now() - Duration::days(50), None);
        test.store.insert_job(now() - Duration::days(1), None);
        test.store.insert_advisory(Some(now() - Duration::hours(1)));

        let report = run_expiry_sweep(&test.deps()).await;

        assert_eq!(report.ran_at, now());
        assert_eq!(report.jobs, RoutineOutcome::Expired { count: 1 });
        assert_eq!(report.advisories, RoutineOutcome::Expired { count: 1 });
        assert_eq!(report.total_expired(), 2);
        assert!(!report.has_failures());
    }

    #[tokio::test]
    async fn test_job_failure_does_not_block_advisories() {
        let test = TestDependencies::new(now());
        test.store.insert_advisory(Some(now() - Duration::hours(1)));

        let report = run_expiry_sweep(&test.deps_failing_for(RecordKind::Job)).await;

        assert!(report.jobs.is_failed());
        assert_eq!(report.advisories, RoutineOutcome::Expired { count: 1 });
        assert!(report.has_failures());
        assert_eq!(test.store.active_count(RecordKind::Advisory), 0);
    }

    #[tokio::test]
    async fn test_failure_is_distinct_from_zero() {
        let test = TestDependencies::new(now());

        let report = run_expiry_sweep(&test.deps_failing_for(RecordKind::Advisory)).await;

        assert_eq!(report.jobs, RoutineOutcome::Expired { count: 0 });
        assert!(report.advisories.is_failed());
        assert_ne!(report.advisories, RoutineOutcome::Expired { count: 0 });
    }

    #[tokio::test]
    async fn test_serializes_with_status_tag() {
        let test = TestDependencies::new(now());

        let report = run_expiry_sweep(&test.deps_failing_for(RecordKind::Advisory)).await;
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["jobs"]["status"], "expired");
        assert_eq!(json["jobs"]["count"], 0);
        assert_eq!(json["advisories"]["status"], "failed");
        assert!(json["advisories"]["error"]
            .as_str()
            .unwrap()
            .contains("simulated outage"));
    }
}
