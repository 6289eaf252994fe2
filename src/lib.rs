//! Facade crate for PlacePicker.
//!
//! This crate re-exports the core domain types and exposes the catalog
//! loader, HTTP geolocator and file-backed selection storage behind feature
//! flags.
//!
//! ```
//! use std::sync::Arc;
//! use placepicker::{Coordinate, MemoryStorage, PlaceId, PlacePicker, bundled_catalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut picker = PlacePicker::new(Arc::new(bundled_catalog()?), MemoryStorage::default());
//! picker.apply_location(Coordinate::new(48.8566, 2.3522));
//! assert_eq!(picker.available_places()[0].title, "Parisian Streets");
//!
//! picker.on_select_place(&PlaceId::from("p10"))?;
//! assert_eq!(picker.picked_places().len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use placepicker_core::{
    Catalog, CatalogError, Command, Coordinate, EMPTY_SELECTION_FALLBACK_TEXT, FixedGeolocator,
    GeolocationError, Geolocator, LocationStatus, MemoryStorage, PendingLocation, Place, PlaceId,
    PlaceImage, PlacePicker, RemovalFlow, RemovalState, SELECTED_PLACES_KEY,
    SORTING_FALLBACK_TEXT, SelectionError, SelectionStorage, SelectionStore, StorageError,
    distance, request_location, sort_by_distance,
};

#[cfg(feature = "data")]
pub use placepicker_data::{
    HttpGeolocator, HttpGeolocatorConfig, HttpGeolocatorError, LoadCatalogError, bundled_catalog,
    load_catalog,
};

#[cfg(feature = "store-fs")]
pub use placepicker_fs::FileStorage;

#[cfg(feature = "test-support")]
pub use placepicker_core::test_support;

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_doubles_are_reachable_through_the_facade() {
        let catalog = test_support::equator_catalog(&[("a", 1.0)]).expect("distinct ids");
        let picker = PlacePicker::new(Arc::new(catalog), test_support::FailingStorage);
        assert!(picker.picked_places().is_empty());
    }
}
