//! Position fetching from the open-notify ISS API.
//!
//! The API returns latitude/longitude as JSON *strings*, so the response is
//! deserialized into an explicit schema and the coordinate fields are parsed
//! to `f64` afterwards. Any shape mismatch is a
//! [`PositionError::Malformed`], not a panic.

use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::error_handling::PositionError;
use crate::models::Sample;

/// A source of position samples.
///
/// Implementations perform at most one outbound call per `fetch` and hold no
/// retry logic; retry-by-next-poll belongs to the polling loop.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Fetches a single position sample.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] when the remote service is unreachable,
    /// times out, or returns malformed data.
    async fn fetch(&self) -> Result<Sample, PositionError>;
}

#[derive(Debug, Deserialize)]
struct IssNowResponse {
    timestamp: i64,
    iss_position: IssPosition,
}

#[derive(Debug, Deserialize)]
struct IssPosition {
    latitude: String,
    longitude: String,
}

/// Parses an open-notify `iss-now` response body into a [`Sample`].
fn parse_sample(body: &str) -> Result<Sample, PositionError> {
    let response: IssNowResponse =
        serde_json::from_str(body).map_err(|e| PositionError::Malformed(e.to_string()))?;

    let latitude = response
        .iss_position
        .latitude
        .parse::<f64>()
        .map_err(|e| PositionError::Malformed(format!("latitude: {e}")))?;
    let longitude = response
        .iss_position
        .longitude
        .parse::<f64>()
        .map_err(|e| PositionError::Malformed(format!("longitude: {e}")))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(PositionError::Malformed(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }

    Ok(Sample {
        timestamp: response.timestamp,
        latitude,
        longitude,
    })
}

/// Position source backed by the open-notify HTTP API.
pub struct OpenNotifyClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl OpenNotifyClient {
    /// Creates a new client for the given endpoint.
    pub fn new(client: Arc<reqwest::Client>, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

impl PositionSource for OpenNotifyClient {
    async fn fetch(&self) -> Result<Sample, PositionError> {
        debug!("Fetching ISS position from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        parse_sample(&body)
    }
}
