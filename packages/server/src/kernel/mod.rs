//! Kernel module - infrastructure the maintenance routines run on.

pub mod deps;
pub mod pg_store;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use deps::ExpiryDeps;
pub use pg_store::PgRecordStore;
pub use scheduled_tasks::{start_scheduler, ExpirySchedules};
pub use test_dependencies::{FailingRecordStore, FixedClock, InMemoryRecordStore, TestDependencies};
pub use traits::*;
