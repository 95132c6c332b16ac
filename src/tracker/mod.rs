//! Visit-change detection: the core decision logic.
//!
//! The tracker holds no in-process state between polls. The last-known
//! country lives in the store and is re-read every cycle, which makes the
//! tracker resumable across restarts for free.

use log::debug;

use crate::config::STATS_TOP_N;
use crate::error_handling::TrackerError;
use crate::models::Sample;
use crate::position::PositionSource;
use crate::resolver::{CountryResolution, CountryResolver};
use crate::storage::{CountryStats, VisitStore};

/// Everything one poll cycle produced, for reporting.
#[derive(Debug)]
pub struct PollSummary {
    /// The fetched position sample.
    pub sample: Sample,
    /// What the coordinates resolved to.
    pub resolution: CountryResolution,
    /// Whether this cycle recorded a new country visit.
    pub visit_recorded: bool,
    /// Up to [`STATS_TOP_N`] countries by visit count.
    pub stats: Vec<CountryStats>,
}

/// Polls the position source and records country changes through the store.
pub struct VisitTracker<S, R> {
    source: S,
    resolver: R,
    store: VisitStore,
}

impl<S: PositionSource, R: CountryResolver> VisitTracker<S, R> {
    /// Creates a tracker over the given collaborators.
    pub fn new(source: S, resolver: R, store: VisitStore) -> Self {
        Self {
            source,
            resolver,
            store,
        }
    }

    /// Runs one poll cycle: fetch, resolve, compare, maybe record.
    ///
    /// The transition rule: a visit is recorded iff the resolved country is
    /// known *and* differs from the stored last-known country. An `Unknown`
    /// resolution never records a visit and never touches the marker, so a
    /// single ocean-crossing sample can't corrupt the comparison baseline or
    /// make the tracker flap between "ocean" and the last real country.
    ///
    /// # Errors
    ///
    /// Propagates fetch and store failures to the caller; the polling loop
    /// owns the log-and-continue policy.
    pub async fn poll(&self) -> Result<PollSummary, TrackerError> {
        let sample = self.source.fetch().await?;
        let resolution = self.resolver.resolve(sample.latitude, sample.longitude);
        let last_country = self.store.last_country().await?;

        let mut visit_recorded = false;
        if let CountryResolution::Country(country) = &resolution {
            if last_country.as_ref() != Some(country) {
                self.store
                    .record_visit(country, sample.latitude, sample.longitude, sample.timestamp)
                    .await?;
                self.store.set_last_country(country).await?;
                visit_recorded = true;
            } else {
                debug!("Still over {country}, no visit recorded");
            }
        }

        let mut stats = self.store.visit_stats().await?;
        stats.truncate(STATS_TOP_N);

        Ok(PollSummary {
            sample,
            resolution,
            visit_recorded,
            stats,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &VisitStore {
        &self.store
    }
}
