// Business domains
pub mod advisories;
pub mod jobs;
pub mod sweep;
