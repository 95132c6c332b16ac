//! Application initialization and resource setup.
//!
//! Provides functions to initialize shared resources:
//! - The logger (plain or JSON format)
//! - The HTTP client (with an explicit timeout)

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
