//! The static, read-only list of places offered to the user.
//!
//! A [`Catalog`] is built once at startup and shared by reference (usually
//! behind an `Arc`) with the selection store and the session controller. It
//! is never mutated after construction.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Coordinate, Place, PlaceId, sort_by_distance};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries shared the same identifier.
    #[error("place id {id} appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: PlaceId,
    },
}

/// Ordered collection of places with identifier lookup.
///
/// # Examples
/// ```
/// use placepicker_core::{Catalog, Coordinate, Place, PlaceId};
///
/// # fn main() -> Result<(), placepicker_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Place::new("a", "Alpha", Coordinate::new(0.0, 0.0)),
///     Place::new("b", "Beta", Coordinate::new(1.0, 1.0)),
/// ])?;
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(&PlaceId::from("b")).map(|p| p.title.as_str()), Some("Beta"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
    index: HashMap<PlaceId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(places.len());
        for (position, place) in places.iter().enumerate() {
            if index.insert(place.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: place.id.clone(),
                });
            }
        }
        Ok(Self { places, index })
    }

    /// Look up a place by identifier.
    #[must_use]
    pub fn get(&self, id: &PlaceId) -> Option<&Place> {
        self.index
            .get(id)
            .and_then(|position| self.places.get(*position))
    }

    /// Whether the catalog holds an entry for `id`.
    #[must_use]
    pub fn contains(&self, id: &PlaceId) -> bool {
        self.index.contains_key(id)
    }

    /// All places in catalog order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Copy of the catalog ordered by distance from `origin`.
    #[must_use]
    pub fn sorted_by_distance(&self, origin: Coordinate) -> Vec<Place> {
        sort_by_distance(&self.places, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn place(id: &str) -> Place {
        Place::new(id, id.to_uppercase(), Coordinate::new(0.0, 0.0))
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![place("a"), place("b"), place("a")])
            .expect_err("duplicate ids should fail");
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: PlaceId::from("a")
            }
        );
    }

    #[rstest]
    fn lookup_preserves_catalog_order() {
        let catalog = Catalog::new(vec![place("c"), place("a"), place("b")]).expect("catalog");
        let ids: Vec<_> = catalog.places().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(catalog.contains(&PlaceId::from("a")));
        assert!(catalog.get(&PlaceId::from("missing")).is_none());
    }

    #[rstest]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).expect("catalog");
        assert!(catalog.is_empty());
    }
}
