//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_tracker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iss_tracker::initialization::init_logger_with;
use iss_tracker::{run_tracker, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_tracker(config.clone()).await {
        Ok(()) => {
            println!(
                "Tracking stopped - visit history saved in {}",
                config.db_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("iss_tracker error: {:#}", e);
            process::exit(1);
        }
    }
}
