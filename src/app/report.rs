//! Per-cycle status reporting.
//!
//! Everything logged here is derived from the [`PollSummary`] alone, so the
//! report can be reproduced (and tested) without touching the loop.

use chrono::DateTime;
use log::info;

use crate::tracker::PollSummary;

/// Formats a unix timestamp for the statistics report.
///
/// Falls back to the raw number for timestamps outside chrono's range.
fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Logs the status of one completed poll cycle.
pub fn log_poll_summary(summary: &PollSummary) {
    let sample = &summary.sample;
    info!(
        "🛰️ ISS position: {}, {} at timestamp {}",
        sample.latitude, sample.longitude, sample.timestamp
    );

    match summary.resolution.country() {
        Some(country) => {
            info!("🌍 Current country: {country}");
            if summary.visit_recorded {
                info!("🚀 New country visit recorded: {country}");
            } else {
                info!("📍 Still over the same country: {country}");
            }
        }
        None => info!("🌊 No landmass match for current position"),
    }

    if !summary.stats.is_empty() {
        info!("📊 Visit statistics:");
        for entry in &summary.stats {
            info!(
                "  {}: {} visit{} (first: {}, last: {})",
                entry.country,
                entry.visit_count,
                if entry.visit_count == 1 { "" } else { "s" },
                format_timestamp(entry.first_visit),
                format_timestamp(entry.last_visit)
            );
        }
    }
}
