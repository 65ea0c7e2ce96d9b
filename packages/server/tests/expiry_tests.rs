//! Expiry routines end to end against the in-memory store.

use chrono::{DateTime, Duration, Utc};
use railhub_core::common::RecordKind;
use railhub_core::domains::advisories::activities::expire_old_advisories;
use railhub_core::domains::jobs::activities::expire_old_jobs;
use railhub_core::domains::sweep::{run_expiry_sweep, RoutineOutcome};
use railhub_core::kernel::{ExpiryDeps, FailingRecordStore, FixedClock, TestDependencies};
use railhub_core::domains::jobs::JobExpiryPolicy;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    "2026-10-19T09:00:00Z".parse().unwrap()
}

#[tokio::test]
async fn directory_scenario() {
    let test = TestDependencies::new(now());
    let store = &test.store;

    let posted_50_days_ago = store.insert_job(now() - Duration::days(50), None);
    let expired_yesterday =
        store.insert_job(now() - Duration::days(10), Some(now() - Duration::days(1)));
    let expires_next_week =
        store.insert_job(now() - Duration::days(10), Some(now() + Duration::days(7)));
    let advisory_hour_ago = store.insert_advisory(Some(now() - Duration::hours(1)));
    let advisory_open_ended = store.insert_advisory(None);

    let deps = test.deps();
    assert_eq!(expire_old_jobs(&deps).await.unwrap(), 2);
    assert_eq!(expire_old_advisories(&deps).await.unwrap(), 1);

    assert_eq!(store.is_active(posted_50_days_ago), Some(false));
    assert_eq!(store.is_active(expired_yesterday), Some(false));
    assert_eq!(store.is_active(expires_next_week), Some(true));
    assert_eq!(store.is_active(advisory_hour_ago), Some(false));
    assert_eq!(store.is_active(advisory_open_ended), Some(true));
}

#[tokio::test]
async fn posting_ages_out_as_clock_moves() {
    let test = TestDependencies::new(now());
    let id = test.store.insert_job(now(), None);
    let deps = test.deps();

    test.clock.advance(Duration::days(45));
    assert_eq!(expire_old_jobs(&deps).await.unwrap(), 0);
    assert_eq!(test.store.is_active(id), Some(true));

    test.clock.advance(Duration::seconds(1));
    assert_eq!(expire_old_jobs(&deps).await.unwrap(), 1);
    assert_eq!(test.store.is_active(id), Some(false));
}

#[tokio::test]
async fn expired_records_stay_expired() {
    let test = TestDependencies::new(now());
    let id = test
        .store
        .insert_job(now() - Duration::days(1), Some(now() - Duration::minutes(1)));
    let deps = test.deps();

    expire_old_jobs(&deps).await.unwrap();
    // Rewinding the clock must not bring the posting back.
    test.clock.set(now() - Duration::days(30));
    expire_old_jobs(&deps).await.unwrap();

    assert_eq!(test.store.is_active(id), Some(false));
}

#[tokio::test]
async fn concurrent_runs_transition_each_record_once() {
    let test = TestDependencies::new(now());
    for days in 46..66 {
        test.store.insert_job(now() - Duration::days(days), None);
    }
    let deps = test.deps();

    let runs: Vec<_> = (0..8)
        .map(|_| {
            let deps = deps.clone();
            tokio::spawn(async move { expire_old_jobs(&deps).await.unwrap() })
        })
        .collect();

    let mut total = 0;
    for run in runs {
        total += run.await.unwrap();
    }

    assert_eq!(total, 20);
    assert_eq!(test.store.active_count(RecordKind::Job), 0);
}

#[tokio::test]
async fn both_routines_propagate_store_failures() {
    let deps = ExpiryDeps::new(
        Arc::new(FailingRecordStore::always()),
        Arc::new(FixedClock::new(now())),
        JobExpiryPolicy::default(),
    );

    let job_err = expire_old_jobs(&deps).await.unwrap_err();
    let advisory_err = expire_old_advisories(&deps).await.unwrap_err();

    assert_eq!(job_err.kind(), RecordKind::Job);
    assert_eq!(advisory_err.kind(), RecordKind::Advisory);
}

#[tokio::test]
async fn sweep_absorbs_failures_but_reports_them() {
    let deps = ExpiryDeps::new(
        Arc::new(FailingRecordStore::always()),
        Arc::new(FixedClock::new(now())),
        JobExpiryPolicy::default(),
    );

    let report = run_expiry_sweep(&deps).await;

    assert!(matches!(report.jobs, RoutineOutcome::Failed { .. }));
    assert!(matches!(report.advisories, RoutineOutcome::Failed { .. }));
    assert_eq!(report.total_expired(), 0);
    assert!(report.has_failures());
}
