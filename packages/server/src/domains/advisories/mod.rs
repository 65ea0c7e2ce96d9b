//! Railroad service advisories: embargoes, service alerts and notices
//! scraped from carrier customer pages.

pub mod activities;
pub mod models;
pub mod slug;

pub use models::{AdvisoryType, NewAdvisory, ServiceAdvisory};
pub use slug::generate_advisory_slug;
