//! CLI for running the expiry routines by hand
//!
//! Prints a JSON result on stdout (logs go to stderr) and exits non-zero
//! when a routine fails, so it can be dropped into any external cron.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use railhub_core::config::{parse_max_age_days, Config};
use railhub_core::domains::advisories::activities::expire_old_advisories;
use railhub_core::domains::jobs::activities::expire_old_jobs;
use railhub_core::domains::sweep::run_expiry_sweep;
use railhub_core::kernel::ExpiryDeps;
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "expire_cli")]
#[command(about = "Expire stale job postings and service advisories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expire job postings past their expiry date or older than the max age
    Jobs {
        /// Override JOB_MAX_AGE_DAYS for this run
        #[arg(long, value_parser = parse_days)]
        max_age_days: Option<i64>,
    },

    /// Expire service advisories past their expiry date
    Advisories,

    /// Run both routines and report each outcome
    Sweep,
}

#[derive(Serialize)]
struct RoutineResult {
    routine: &'static str,
    expired: u64,
}

fn parse_days(raw: &str) -> Result<i64, String> {
    parse_max_age_days(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Commands::Jobs {
        max_age_days: Some(days),
    } = cli.command
    {
        config.job_max_age_days = days;
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let deps = ExpiryDeps::from_pool(pool, config.job_policy());

    let failed = match cli.command {
        Commands::Jobs { .. } => {
            let expired = expire_old_jobs(&deps).await?;
            print_json(&RoutineResult {
                routine: "jobs",
                expired,
            })?;
            false
        }
        Commands::Advisories => {
            let expired = expire_old_advisories(&deps).await?;
            print_json(&RoutineResult {
                routine: "advisories",
                expired,
            })?;
            false
        }
        Commands::Sweep => {
            let report = run_expiry_sweep(&deps).await;
            print_json(&report)?;
            report.has_failures()
        }
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
