// Railhub Directory - Maintenance Core
//
// Backend maintenance for the rail freight directory: time-based expiry of
// job postings and service advisories, the Postgres store those routines
// act on, and the cron scheduler that drives them.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
