//! Error types emitted by the PlacePicker CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placepicker_core::{PlaceId, SelectionError};
use placepicker_data::{HttpGeolocatorError, LoadCatalogError};
use thiserror::Error;

/// Errors emitted by the PlacePicker CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Two options that exclude each other were both supplied.
    #[error("--{first} cannot be combined with --{second}")]
    ConflictingArguments {
        /// First conflicting flag.
        first: &'static str,
        /// Second conflicting flag.
        second: &'static str,
    },
    /// A coordinate component was outside its valid range.
    #[error("{field} {value} is out of range ({min} to {max})")]
    InvalidCoordinate {
        /// Flag name of the coordinate component.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the path option.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the path option.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the path option.
        field: &'static str,
        /// Path being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the place catalog failed.
    #[error(transparent)]
    LoadCatalog(#[from] LoadCatalogError),
    /// Opening the selection storage directory failed.
    #[error("failed to open selection storage at {path:?}: {source}")]
    OpenStorage {
        /// Storage directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Updating the selection failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The place to remove is not in the picked list.
    #[error("place {id} is not picked")]
    NotPicked {
        /// Requested place.
        id: PlaceId,
    },
    /// Constructing the geolocator failed.
    #[error("failed to build geolocator for {url:?}: {source}")]
    BuildGeolocator {
        /// Configured geolocation endpoint.
        url: String,
        /// Build failure.
        #[source]
        source: HttpGeolocatorError,
    },
    /// Building the async runtime for the location lookup failed.
    #[error("failed to start the location lookup runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Reading the confirmation answer failed.
    #[error("failed to read confirmation: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
