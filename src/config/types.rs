//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_SECS, DB_PATH, ISS_POSITION_ENDPOINT,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: human-readable format with colors (default)
/// - `Json`: structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Tracker configuration.
///
/// Doubles as the CLI surface (via clap derive) and as a plain struct for
/// library and test use.
///
/// # Examples
///
/// ```no_run
/// use iss_tracker::Config;
///
/// let config = Config {
///     interval_seconds: 30,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "iss_tracker",
    version,
    about = "Polls the ISS position and records country visits in SQLite"
)]
pub struct Config {
    /// Seconds to wait between poll cycles
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub interval_seconds: u64,

    /// Path to the SQLite database file
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// URL of the ISS position endpoint
    #[arg(long, default_value = ISS_POSITION_ENDPOINT)]
    pub endpoint: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_POLL_INTERVAL_SECS,
            db_path: PathBuf::from(DB_PATH),
            endpoint: ISS_POSITION_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
