//! Great-circle distance between coordinates.

use geo::{Distance, Haversine, Point};

use crate::Coordinate;

/// Haversine distance between `a` and `b` in kilometres.
///
/// The result is non-negative and symmetric. Malformed input (NaN
/// coordinates) yields NaN rather than an error.
///
/// # Examples
/// ```
/// use placepicker_core::{Coordinate, distance};
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let km = distance(london, paris);
/// assert!((340.0..350.0).contains(&km));
/// assert_eq!(distance(london, london), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "geo reports metres; callers work in kilometres"
)]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let metres = Haversine.distance(Point::from(a), Point::from(b));
    metres / 1000.0
}
