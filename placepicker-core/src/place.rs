use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic position in WGS84 degrees.
///
/// Serialises as `{"lat": .., "lon": ..}` so catalog entries can flatten it
/// next to their other fields.
///
/// # Examples
/// ```
/// use geo::Point;
/// use placepicker_core::Coordinate;
///
/// let coordinate = Coordinate::new(51.5, -0.1);
/// let point: Point<f64> = coordinate.into();
///
/// assert_eq!(point.x(), -0.1);
/// assert_eq!(point.y(), 51.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Unique identifier of a catalog entry.
///
/// Serialised transparently as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    /// Wrap a string identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Image metadata shown alongside a place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceImage {
    /// Location of the image asset.
    pub src: String,
    /// Alternative text for the image.
    pub alt: String,
}

/// A visitable location from the static catalog.
///
/// Places are immutable once loaded; selections refer to them by [`PlaceId`].
///
/// # Examples
/// ```
/// use placepicker_core::{Coordinate, Place};
///
/// let place = Place::new("p1", "Forest Waterfall", Coordinate::new(44.5588, -80.344));
///
/// assert_eq!(place.id.as_str(), "p1");
/// assert!(place.image.src.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier.
    pub id: PlaceId,
    /// Display title.
    pub title: String,
    /// Image metadata.
    #[serde(default)]
    pub image: PlaceImage,
    /// Geographic position.
    #[serde(flatten)]
    pub location: Coordinate,
}

impl Place {
    /// Construct a place without image metadata.
    #[must_use]
    pub fn new(id: impl Into<PlaceId>, title: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: PlaceImage::default(),
            location,
        }
    }

    /// Attach image metadata.
    #[must_use]
    pub fn with_image(mut self, image: PlaceImage) -> Self {
        self.image = image;
        self
    }
}
