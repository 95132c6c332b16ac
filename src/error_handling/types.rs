//! Error type definitions.
//!
//! All per-cycle errors surface to the polling loop, which logs them and
//! moves on to the next tick. Nothing here terminates the process.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Error types for fetching the current position.
///
/// Both variants mean the same thing to the caller: no usable sample this
/// cycle. The split exists so logs distinguish network trouble from a
/// response that arrived but did not match the expected schema.
#[derive(Error, Debug)]
pub enum PositionError {
    /// The HTTP request failed (unreachable, timed out, non-2xx status).
    #[error("Position service unavailable: {0}")]
    Request(#[from] reqwest::Error),

    /// The response arrived but its shape or values could not be parsed.
    #[error("Malformed position response: {0}")]
    Malformed(String),
}

/// Error types for persistence operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreation(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Any error a single poll cycle can produce.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The position fetch failed; the cycle is skipped.
    #[error(transparent)]
    Position(#[from] PositionError),

    /// A store read or write failed; the cycle is skipped.
    #[error(transparent)]
    Store(#[from] StoreError),
}
