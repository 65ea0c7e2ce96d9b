use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::jobs::{JobExpiryPolicy, DEFAULT_MAX_AGE_DAYS};
use crate::kernel::scheduled_tasks::{
    ExpirySchedules, DEFAULT_ADVISORY_EXPIRY_SCHEDULE, DEFAULT_JOB_EXPIRY_SCHEDULE,
};

/// Upper bound on the configurable job age, ten years.
const MAX_JOB_AGE_DAYS: i64 = 3650;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub job_max_age_days: i64,
    pub job_expiry_schedule: String,
    pub advisory_expiry_schedule: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            job_max_age_days: match env::var("JOB_MAX_AGE_DAYS") {
                Ok(raw) => parse_max_age_days(&raw)?,
                Err(_) => DEFAULT_MAX_AGE_DAYS,
            },
            job_expiry_schedule: env::var("JOB_EXPIRY_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_JOB_EXPIRY_SCHEDULE.to_string()),
            advisory_expiry_schedule: env::var("ADVISORY_EXPIRY_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_ADVISORY_EXPIRY_SCHEDULE.to_string()),
        })
    }

    pub fn job_policy(&self) -> JobExpiryPolicy {
        JobExpiryPolicy::with_max_age_days(self.job_max_age_days)
    }

    pub fn schedules(&self) -> ExpirySchedules {
        ExpirySchedules {
            jobs: self.job_expiry_schedule.clone(),
            advisories: self.advisory_expiry_schedule.clone(),
        }
    }
}

/// Parse a max job age in whole days; must be between 1 and ten years.
pub fn parse_max_age_days(raw: &str) -> Result<i64> {
    let days: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("JOB_MAX_AGE_DAYS must be a whole number of days, got {:?}", raw))?;

    if !(1..=MAX_JOB_AGE_DAYS).contains(&days) {
        bail!(
            "JOB_MAX_AGE_DAYS must be between 1 and {}, got {}",
            MAX_JOB_AGE_DAYS,
            days
        );
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_age_days() {
        assert_eq!(parse_max_age_days("45").unwrap(), 45);
        assert_eq!(parse_max_age_days(" 30 ").unwrap(), 30);
    }

    #[test]
    fn test_rejects_non_positive_age() {
        assert!(parse_max_age_days("0").is_err());
        assert!(parse_max_age_days("-7").is_err());
    }

    #[test]
    fn test_rejects_garbage_age() {
        let err = parse_max_age_days("six weeks").unwrap_err();
        assert!(err.to_string().contains("JOB_MAX_AGE_DAYS"));
    }

    #[test]
    fn test_rejects_absurd_age() {
        assert!(parse_max_age_days("100000").is_err());
    }

    #[test]
    fn test_policy_and_schedules_follow_config() {
        let config = Config {
            database_url: "postgres://localhost/railhub".to_string(),
            database_max_connections: 5,
            job_max_age_days: 30,
            job_expiry_schedule: "0 0 * * * *".to_string(),
            advisory_expiry_schedule: DEFAULT_ADVISORY_EXPIRY_SCHEDULE.to_string(),
        };

        assert_eq!(config.job_policy(), JobExpiryPolicy::with_max_age_days(30));
        assert_eq!(config.schedules().jobs, "0 0 * * * *");
        assert_eq!(config.schedules().advisories, DEFAULT_ADVISORY_EXPIRY_SCHEDULE);
    }
}
