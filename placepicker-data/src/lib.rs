//! Data access for PlacePicker.
//!
//! Responsibilities:
//! - Load the place catalog from JSON files or the bundled sample.
//! - Resolve the current position through an HTTP geolocation service.
//!
//! Boundaries:
//! - Do not encode selection or sorting rules (live in `placepicker-core`).
//! - Network lookups are async and run on the caller's runtime.
#![forbid(unsafe_code)]

mod catalog;
mod geolocation;

pub use catalog::{
    BUNDLED_CATALOG_ORIGIN, LoadCatalogError, bundled_catalog, load_catalog, parse_catalog,
};
pub use geolocation::{
    DEFAULT_GEOLOCATION_URL, DEFAULT_USER_AGENT, HttpGeolocator, HttpGeolocatorConfig,
    HttpGeolocatorError,
};
