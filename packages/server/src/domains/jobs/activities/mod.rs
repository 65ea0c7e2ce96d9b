pub mod expire_old_jobs;

pub use expire_old_jobs::{expire_old_jobs, expire_old_jobs_at};
