//! Rail jobs board: postings ingested from railroad career sites.

pub mod activities;
pub mod models;
pub mod policy;
pub mod utils;

pub use models::{Job, NewJob};
pub use policy::{JobExpiryPolicy, DEFAULT_MAX_AGE_DAYS};
