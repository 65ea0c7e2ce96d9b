//! Helpers the ingestion side uses when it writes job postings.

pub mod categories;
pub mod content_hash;
pub mod slug;

pub use categories::{classify_job, JOB_CATEGORIES};
pub use content_hash::generate_content_hash;
pub use slug::{generate_company_slug, generate_job_slug};
