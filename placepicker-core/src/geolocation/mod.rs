//! One-shot acquisition of the user's current position.
//!
//! The [`Geolocator`] trait abstracts the host's location service. Callers
//! issue a single request with [`request_location`], drive the returned
//! future on their executor and poll the [`PendingLocation`] from their event
//! loop. The request is never retried or cancelled; a failure simply means no
//! coordinate ever arrives.

mod error;
mod provider;
mod request;

pub use error::GeolocationError;
pub use provider::{FixedGeolocator, Geolocator};
pub use request::{LocationStatus, PendingLocation, request_location};
