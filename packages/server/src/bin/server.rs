//! Maintenance server
//!
//! Connects to Postgres, applies migrations, runs one expiry sweep to catch
//! up on anything missed while down, then keeps the cron scheduler running
//! until Ctrl-C.

use anyhow::{Context, Result};
use railhub_core::domains::sweep::run_expiry_sweep;
use railhub_core::kernel::{start_scheduler, ExpiryDeps};
use railhub_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,railhub_core=debug,sqlx=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Railhub maintenance server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        max_job_age_days = config.job_max_age_days,
        "Configuration loaded"
    );

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let deps = ExpiryDeps::from_pool(pool, config.job_policy());

    // Catch-up sweep before the first scheduled tick
    let report = run_expiry_sweep(&deps).await;
    if report.has_failures() {
        tracing::warn!("Startup sweep had failures; scheduled runs will retry");
    }

    let mut scheduler = start_scheduler(deps, &config.schedules())
        .await
        .context("Failed to start scheduler")?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutdown signal received, stopping scheduler");
    scheduler
        .shutdown()
        .await
        .context("Failed to stop scheduler")?;

    Ok(())
}
