//! Test doubles for storage and geolocation used by unit and behaviour
//! tests in dependent crates.

use async_trait::async_trait;

use crate::{
    Catalog, CatalogError, Coordinate, GeolocationError, Geolocator, Place, SelectionStorage,
    StorageError,
};

/// `SelectionStorage` whose reads and writes always fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

impl SelectionStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_owned(),
            source: std::io::Error::other("storage unavailable"),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_owned(),
            source: std::io::Error::other("storage unavailable"),
        })
    }
}

/// `Geolocator` that always fails with the configured error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingGeolocator {
    error: GeolocationError,
}

impl FailingGeolocator {
    /// Fail every request with `error`.
    #[must_use]
    pub const fn new(error: GeolocationError) -> Self {
        Self { error }
    }

    /// Fail every request as if the user denied permission.
    #[must_use]
    pub const fn denied() -> Self {
        Self::new(GeolocationError::PermissionDenied)
    }
}

#[async_trait]
impl Geolocator for FailingGeolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Err(self.error.clone())
    }
}

/// Catalog of places strung along the equator east of the origin.
///
/// Each `(id, degrees)` pair becomes a place at latitude zero and the given
/// longitude, so distance from the origin grows with `degrees`.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateId`] when `entries` repeats an id.
pub fn equator_catalog(entries: &[(&str, f64)]) -> Result<Catalog, CatalogError> {
    let places = entries
        .iter()
        .map(|(id, degrees)| Place::new(*id, id.to_uppercase(), Coordinate::new(0.0, *degrees)))
        .collect();
    Catalog::new(places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn equator_catalog_keeps_entry_order() {
        let catalog = equator_catalog(&[("b", 2.0), ("a", 1.0)]).expect("distinct ids");
        let ids: Vec<&str> = catalog.places().iter().map(|place| place.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[rstest]
    fn equator_catalog_rejects_repeated_ids() {
        let err = equator_catalog(&[("a", 1.0), ("a", 2.0)]).expect_err("repeated id");
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }
}
