//! Proximity ordering of catalog entries.

use crate::{Coordinate, Place, distance};

/// Return `places` ordered ascending by distance from `origin`.
///
/// The sort is stable, so places at equal distance keep their relative
/// order. The input slice is left untouched. Places whose distance is NaN
/// sort after every finite distance.
///
/// # Examples
/// ```
/// use placepicker_core::{Coordinate, Place, sort_by_distance};
///
/// let places = vec![
///     Place::new("far", "Far", Coordinate::new(0.0, 5.0)),
///     Place::new("near", "Near", Coordinate::new(0.0, 1.0)),
/// ];
/// let sorted = sort_by_distance(&places, Coordinate::new(0.0, 0.0));
///
/// assert_eq!(sorted[0].id.as_str(), "near");
/// assert_eq!(places[0].id.as_str(), "far");
/// ```
#[must_use]
pub fn sort_by_distance(places: &[Place], origin: Coordinate) -> Vec<Place> {
    let mut keyed: Vec<(f64, &Place)> = places
        .iter()
        .map(|place| (distance(place.location, origin), place))
        .collect();
    // `total_cmp` puts positive NaN after +inf; `abs` folds negative NaN there too.
    keyed.sort_by(|(left, _), (right, _)| left.abs().total_cmp(&right.abs()));
    keyed.into_iter().map(|(_, place)| place.clone()).collect()
}
