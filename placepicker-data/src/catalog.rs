//! Catalog loading from JSON files and the bundled sample catalog.
//!
//! The expected format is a JSON array of place objects:
//!
//! ```json
//! [{ "id": "p1", "title": "Forest Waterfall",
//!    "image": { "src": "forest-waterfall.jpg", "alt": "..." },
//!    "lat": 44.5588, "lon": -80.344 }]
//! ```

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use placepicker_core::{Catalog, CatalogError, Place};
use placepicker_fs::open_utf8_file;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../data/places.json");

/// Label used in errors raised while decoding the bundled catalog.
pub const BUNDLED_CATALOG_ORIGIN: &str = "bundled catalog";

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadCatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog at {path}: {source}")]
    Open {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog was not a JSON array of places.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Path or label of the catalog source.
        origin: String,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded places did not form a valid catalog.
    #[error("invalid {origin}: {source}")]
    Invalid {
        /// Path or label of the catalog source.
        origin: String,
        /// Validation failure.
        #[source]
        source: CatalogError,
    },
}

/// Load a catalog from the JSON file at `path`.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, LoadCatalogError> {
    let file = open_utf8_file(path).map_err(|source| LoadCatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let places: Vec<Place> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadCatalogError::Parse {
            origin: path.to_string(),
            source,
        })?;
    debug!("loaded {} places from {path}", places.len());
    build(places, path.as_str())
}

/// Parse a catalog from JSON text; `origin` labels errors.
pub fn parse_catalog(json: &str, origin: &str) -> Result<Catalog, LoadCatalogError> {
    let places: Vec<Place> =
        serde_json::from_str(json).map_err(|source| LoadCatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    build(places, origin)
}

/// The sample catalog compiled into the crate.
///
/// # Examples
/// ```
/// use placepicker_core::PlaceId;
/// use placepicker_data::bundled_catalog;
///
/// let catalog = bundled_catalog()?;
/// assert!(catalog.contains(&PlaceId::from("p1")));
/// # Ok::<(), placepicker_data::LoadCatalogError>(())
/// ```
pub fn bundled_catalog() -> Result<Catalog, LoadCatalogError> {
    parse_catalog(BUNDLED_CATALOG, BUNDLED_CATALOG_ORIGIN)
}

fn build(places: Vec<Place>, origin: &str) -> Result<Catalog, LoadCatalogError> {
    Catalog::new(places).map_err(|source| LoadCatalogError::Invalid {
        origin: origin.to_owned(),
        source,
    })
}
