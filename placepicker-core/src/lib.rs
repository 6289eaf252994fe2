//! Core domain for PlacePicker.
//!
//! The crate models a static catalog of [`Place`] values, orders it by
//! distance from the user's position and keeps a persisted, newest-first
//! selection of picked places:
//!
//! - [`distance`] and [`sort_by_distance`] compute the proximity view.
//! - [`SelectionStore`] owns the picked list and is the only writer of the
//!   identifier list stored under [`SELECTED_PLACES_KEY`].
//! - [`RemovalFlow`] gates removals behind a confirmation step.
//! - [`request_location`] issues the single, fire-and-forget position
//!   request against a [`Geolocator`].
//! - [`PlacePicker`] wires the pieces behind the event entry points a
//!   presentation layer calls.
//!
//! Nothing here fails on bad persisted data: malformed or stale entries
//! degrade to an empty or filtered selection.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod distance;
mod geolocation;
mod picker;
mod place;
mod removal;
mod selection;
mod sort;
mod storage;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use distance::distance;
pub use geolocation::{
    FixedGeolocator, GeolocationError, Geolocator, LocationStatus, PendingLocation,
    request_location,
};
pub use picker::{EMPTY_SELECTION_FALLBACK_TEXT, PlacePicker, SORTING_FALLBACK_TEXT};
pub use place::{Coordinate, Place, PlaceId, PlaceImage};
pub use removal::{RemovalFlow, RemovalState};
pub use selection::{Command, SELECTED_PLACES_KEY, SelectionError, SelectionStore};
pub use sort::sort_by_distance;
pub use storage::{MemoryStorage, SelectionStorage, StorageError};
