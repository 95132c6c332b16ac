//! Error taxonomy for the tracker.
//!
//! Defines typed errors for initialization, position fetching, and
//! persistence. A resolver miss (no landmass match) is deliberately not an
//! error; see [`crate::resolver::CountryResolution`].

mod types;

pub use types::{InitializationError, PositionError, StoreError, TrackerError};
