//! iss_tracker library: ISS country-visit tracking.
//!
//! Polls the open-notify API for the current ISS position, reverse-geocodes
//! the coordinates to a country, and records a visit in SQLite every time the
//! country changes, together with running per-country statistics.
//!
//! # Example
//!
//! ```no_run
//! use iss_tracker::{run_tracker, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     interval_seconds: 30,
//!     ..Default::default()
//! };
//!
//! // Runs until ctrl-c
//! run_tracker(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod position;
mod resolver;
mod storage;
mod tracker;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{PositionError, StoreError, TrackerError};
pub use models::{CountryId, Sample};
pub use position::{OpenNotifyClient, PositionSource};
pub use resolver::{CountryResolution, CountryResolver, GeonamesResolver};
pub use run::run_tracker;
pub use storage::{init_db_pool_with_path, run_migrations, CountryStats, VisitStore};
pub use tracker::{PollSummary, VisitTracker};

// Internal run module (contains the polling loop)
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::app::log_poll_summary;
    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::position::OpenNotifyClient;
    use crate::resolver::GeonamesResolver;
    use crate::storage::{init_db_pool_with_path, run_migrations, VisitStore};
    use crate::tracker::VisitTracker;

    /// Runs the tracking loop until interrupted.
    ///
    /// Initializes the database, HTTP client, and geocoding dataset, then
    /// polls on a fixed interval. Each cycle is independent: a failed cycle
    /// is logged and the loop proceeds to the next tick. The interrupt
    /// signal is honored during the sleep between cycles, never mid-cycle.
    ///
    /// # Errors
    ///
    /// Returns an error only for initialization failures (database, HTTP
    /// client). Per-cycle failures never terminate the loop.
    pub async fn run_tracker(config: Config) -> Result<()> {
        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let source = OpenNotifyClient::new(client, config.endpoint.clone());
        let resolver = GeonamesResolver::new();
        let store = VisitStore::new(pool.as_ref().clone());
        let tracker = VisitTracker::new(source, resolver, store);

        info!(
            "🚀 Starting ISS tracking (checking every {} seconds)",
            config.interval_seconds
        );
        info!("Press Ctrl+C to stop");

        loop {
            match tracker.poll().await {
                Ok(summary) => log_poll_summary(&summary),
                Err(e) => error!("❌ Tracking cycle failed: {e}"),
            }

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(config.interval_seconds)) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("🛑 Tracking stopped by user");
                    break;
                }
            }
        }

        if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
            .execute(pool.as_ref())
            .await
        {
            log::warn!("Failed to checkpoint WAL file (non-critical): {e}");
        }

        Ok(())
    }
}
