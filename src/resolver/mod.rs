//! Reverse geocoding of coordinates to countries.
//!
//! Uses the offline GeoNames dataset embedded in the `reverse_geocoder`
//! crate (nearest populated place by k-d tree) and maps the resulting ISO
//! alpha-2 code to a display name via `rust_iso3166`. Codes with no ISO
//! entry fall back to the raw code so the identifier stays stable either
//! way.

use log::info;
use reverse_geocoder::ReverseGeocoder;

use crate::models::CountryId;

/// Outcome of resolving a coordinate pair.
///
/// `Unknown` is a value, not an error: it means the dataset had no usable
/// match (open ocean, resolver gap). The tracker must never record it as a
/// visit or let it overwrite the last-known country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryResolution {
    /// Best-effort nearest country for the coordinates.
    Country(CountryId),
    /// No landmass match.
    Unknown,
}

impl CountryResolution {
    /// Returns the resolved country, if any.
    pub fn country(&self) -> Option<&CountryId> {
        match self {
            CountryResolution::Country(id) => Some(id),
            CountryResolution::Unknown => None,
        }
    }

    /// Whether this resolution is the no-match sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, CountryResolution::Unknown)
    }
}

/// Maps a coordinate pair to a country.
pub trait CountryResolver {
    /// Resolves the given coordinates to a best-effort nearest country.
    fn resolve(&self, latitude: f64, longitude: f64) -> CountryResolution;
}

/// Resolver backed by the offline GeoNames dataset.
pub struct GeonamesResolver {
    geocoder: ReverseGeocoder,
}

impl GeonamesResolver {
    /// Loads the embedded GeoNames dataset.
    pub fn new() -> Self {
        let geocoder = ReverseGeocoder::new();
        info!("Loaded offline GeoNames reverse-geocoding dataset");
        Self { geocoder }
    }

    /// Converts an ISO alpha-2 code into a display name.
    ///
    /// Falls back to the code itself when the code is not in the ISO 3166
    /// table, matching the behavior of looking a country up and keeping the
    /// raw code on a miss.
    fn country_name(code: &str) -> String {
        rust_iso3166::from_alpha2(code)
            .map(|country| country.name.to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

impl Default for GeonamesResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryResolver for GeonamesResolver {
    fn resolve(&self, latitude: f64, longitude: f64) -> CountryResolution {
        // The k-d tree always yields a nearest record; the sentinel case is
        // a record with an empty country code.
        let result = self.geocoder.search((latitude, longitude));
        let code = result.record.cc.as_str();
        if code.is_empty() {
            return CountryResolution::Unknown;
        }

        CountryResolution::Country(CountryId::from(Self::country_name(code)))
    }
}
