//! Core domain types shared across modules.

use std::fmt;

/// One fetched position reading: a unix timestamp plus coordinates.
///
/// Samples are ephemeral; they are never persisted directly. Only the visits
/// derived from them end up in the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Unix timestamp (seconds) reported by the position API.
    pub timestamp: i64,
    /// Latitude in decimal degrees (-90..90).
    pub latitude: f64,
    /// Longitude in decimal degrees (-180..180).
    pub longitude: f64,
}

/// Stable identifier for a resolved country.
///
/// The display name (e.g. "Japan") is the comparison key: two samples over the
/// same country must produce an identical `CountryId`, so the resolver is the
/// only place these are built from raw geocoder output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryId(String);

impl CountryId {
    /// Returns the country name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CountryId {
    fn from(name: String) -> Self {
        CountryId(name)
    }
}

impl From<&str> for CountryId {
    fn from(name: &str) -> Self {
        CountryId(name.to_string())
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_id_equality_is_case_sensitive() {
        assert_eq!(CountryId::from("Japan"), CountryId::from("Japan"));
        assert_ne!(CountryId::from("Japan"), CountryId::from("japan"));
    }

    #[test]
    fn country_id_display_matches_name() {
        let id = CountryId::from("New Zealand");
        assert_eq!(id.to_string(), "New Zealand");
        assert_eq!(id.as_str(), "New Zealand");
    }
}
