//! Location service trait and a fixed-position implementation.

use async_trait::async_trait;

use crate::Coordinate;

use super::error::GeolocationError;

/// Source of the user's current position.
///
/// Implementations are queried at most once per session by
/// [`request_location`](crate::request_location).
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use placepicker_core::{Coordinate, GeolocationError, Geolocator};
///
/// struct Denied;
///
/// #[async_trait]
/// impl Geolocator for Denied {
///     async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
///         Err(GeolocationError::PermissionDenied)
///     }
/// }
/// ```
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Resolve the current position.
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

#[async_trait]
impl<T: Geolocator + ?Sized> Geolocator for Box<T> {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        (**self).current_position().await
    }
}

/// Geolocator reporting a position known up front, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGeolocator {
    position: Coordinate,
}

impl FixedGeolocator {
    /// Always report `position`.
    #[must_use]
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.position)
    }
}
