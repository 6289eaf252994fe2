//! Response model for IP geolocation lookups.

use placepicker_core::Coordinate;
use serde::Deserialize;

/// Body returned by an IP geolocation endpoint.
///
/// Services disagree on field names, so both the long and the short forms
/// are accepted. Any extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocationResponse {
    #[serde(alias = "lat")]
    pub(crate) latitude: Option<f64>,
    #[serde(alias = "lon", alias = "lng")]
    pub(crate) longitude: Option<f64>,
    /// Set by services that report failures in a 200 response.
    #[serde(default)]
    pub(crate) error: bool,
    #[serde(default, alias = "message")]
    pub(crate) reason: Option<String>,
}

/// Why a [`LocationResponse`] could not be turned into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResponseProblem {
    /// The service flagged the lookup as failed.
    Reported(String),
    /// Latitude or longitude was absent.
    Missing,
    /// Latitude or longitude was outside its valid range.
    OutOfRange,
}

impl LocationResponse {
    pub(crate) fn into_coordinate(self) -> Result<Coordinate, ResponseProblem> {
        if self.error {
            return Err(ResponseProblem::Reported(
                self.reason
                    .unwrap_or_else(|| "lookup failed without a reason".to_owned()),
            ));
        }
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ResponseProblem::Missing);
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ResponseProblem::OutOfRange);
        }
        Ok(Coordinate::new(latitude, longitude))
    }
}
