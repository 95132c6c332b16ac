//! Configuration constants.
//!
//! Defaults for polling, networking, and reporting. All of these can be
//! overridden on the command line except `STATS_TOP_N`, which only affects
//! how much of the statistics table is echoed per cycle.

/// Seconds between poll cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// HTTP request timeout in seconds.
///
/// The position API imposes no timeout of its own, so the client enforces
/// one; without it a stalled connection would block the (single-threaded)
/// polling loop indefinitely.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default SQLite database path.
pub const DB_PATH: &str = "./iss_tracker.db";

/// Endpoint returning the current ISS position as JSON.
pub const ISS_POSITION_ENDPOINT: &str = "http://api.open-notify.org/iss-now.json";

/// How many countries to include in the per-cycle statistics report.
pub const STATS_TOP_N: usize = 10;

/// Key under which the last known country is stored in `app_state`.
pub const LAST_COUNTRY_KEY: &str = "last_country";
