//! Application-level reporting helpers.

mod report;

pub use report::log_poll_summary;
