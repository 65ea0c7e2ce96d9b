//! Typed ids for the records the maintenance routines touch.

pub use super::id::Id;

/// Marker type for job postings.
pub struct Job;

/// Marker type for railroad service advisories (embargoes, notices).
pub struct Advisory;

pub type JobId = Id<Job>;
pub type AdvisoryId = Id<Advisory>;
