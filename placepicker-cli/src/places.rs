//! `places` command: list the catalog, nearest first once located.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placepicker_core::{Coordinate, Geolocator, PlacePicker, distance, request_location};
use placepicker_data::{DEFAULT_GEOLOCATION_URL, HttpGeolocator};
use placepicker_fs::FileStorage;
use serde::{Deserialize, Serialize};

use crate::session::{SessionConfig, describe, write_line};
use crate::{
    ARG_CATALOG, ARG_GEOLOCATION_URL, ARG_LAT, ARG_LOCATE, ARG_LON, ARG_STORAGE_DIR, CliError,
    ENV_LAT, ENV_LON,
};

/// CLI arguments for the `places` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the places in the catalog. With --lat/--lon, or \
                 --locate to ask an IP geolocation service, places are \
                 sorted by distance from that position; otherwise they keep \
                 catalog order.",
    about = "List available places"
)]
#[ortho_config(prefix = "PLACEPICKER")]
pub(crate) struct PlacesArgs {
    /// Path to a JSON catalog; the bundled catalog is used when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Directory holding the persisted selection.
    #[arg(long = ARG_STORAGE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) storage_dir: Option<Utf8PathBuf>,
    /// Latitude of the current position in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the current position in degrees.
    #[arg(long = ARG_LON, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Look the current position up over HTTP.
    #[arg(long = ARG_LOCATE)]
    #[serde(default)]
    pub(crate) locate: bool,
    /// Endpoint used by --locate.
    #[arg(long = ARG_GEOLOCATION_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geolocation_url: Option<String>,
}

impl PlacesArgs {
    pub(crate) fn into_config(self) -> Result<PlacesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlacesConfig::try_from(merged)
    }
}

/// Where the current position comes from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LocationSource {
    /// No position; places keep catalog order.
    Unlocated,
    /// Position given on the command line or in configuration.
    Fixed(Coordinate),
    /// Position looked up from the given endpoint.
    Lookup(String),
}

/// Resolved `places` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacesConfig {
    pub(crate) session: SessionConfig,
    pub(crate) location: LocationSource,
}

impl TryFrom<PlacesArgs> for PlacesConfig {
    type Error = CliError;

    fn try_from(args: PlacesArgs) -> Result<Self, Self::Error> {
        let session = SessionConfig::new(args.catalog, args.storage_dir);
        let location = match (args.lat, args.lon, args.locate) {
            (Some(_), _, true) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_LOCATE,
                    second: ARG_LAT,
                });
            }
            (None, Some(_), true) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_LOCATE,
                    second: ARG_LON,
                });
            }
            (Some(lat), Some(lon), false) => LocationSource::Fixed(coordinate(lat, lon)?),
            (Some(_), None, false) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LON,
                    env: ENV_LON,
                });
            }
            (None, Some(_), false) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LAT,
                    env: ENV_LAT,
                });
            }
            (None, None, true) => LocationSource::Lookup(
                args.geolocation_url
                    .unwrap_or_else(|| DEFAULT_GEOLOCATION_URL.to_owned()),
            ),
            (None, None, false) => LocationSource::Unlocated,
        };
        Ok(Self { session, location })
    }
}

const LATITUDE_LIMITS: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_LIMITS: (f64, f64) = (-180.0, 180.0);

fn coordinate(lat: f64, lon: f64) -> Result<Coordinate, CliError> {
    check_range(ARG_LAT, lat, LATITUDE_LIMITS)?;
    check_range(ARG_LON, lon, LONGITUDE_LIMITS)?;
    Ok(Coordinate::new(lat, lon))
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), CliError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CliError::InvalidCoordinate {
            field,
            value,
            min,
            max,
        })
    }
}

/// Builds the geolocator used by `--locate`.
pub(crate) trait GeolocatorBuilder {
    fn build(&self, url: &str) -> Result<Box<dyn Geolocator>, CliError>;
}

pub(crate) struct DefaultGeolocatorBuilder;

impl GeolocatorBuilder for DefaultGeolocatorBuilder {
    fn build(&self, url: &str) -> Result<Box<dyn Geolocator>, CliError> {
        let geolocator = HttpGeolocator::new(url).map_err(|source| CliError::BuildGeolocator {
            url: url.to_owned(),
            source,
        })?;
        Ok(Box::new(geolocator))
    }
}

pub(crate) fn run_places(
    args: PlacesArgs,
    geolocators: &dyn GeolocatorBuilder,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_places_with(&config, geolocators, output)
}

pub(crate) fn run_places_with(
    config: &PlacesConfig,
    geolocators: &dyn GeolocatorBuilder,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    config.session.validate_sources()?;
    let mut picker = config.session.open()?;
    let origin = match &config.location {
        LocationSource::Unlocated => None,
        LocationSource::Fixed(position) => Some(*position),
        LocationSource::Lookup(url) => locate(geolocators.build(url)?)?,
    };
    if let Some(position) = origin {
        picker.apply_location(position);
    }
    write_places(&picker, origin, output)
}

/// Resolve the position once, blocking until the lookup settles.
fn locate(geolocator: Box<dyn Geolocator>) -> Result<Option<Coordinate>, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let (pending, lookup) = request_location(geolocator);
    let position = runtime.block_on(async move {
        lookup.await;
        pending.wait().await
    });
    if position.is_none() {
        info!("no position available; listing places in catalog order");
    }
    Ok(position)
}

fn write_places(
    picker: &PlacePicker<FileStorage>,
    origin: Option<Coordinate>,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(text) = picker.available_fallback_text() {
        write_line(output, text)?;
    }
    for place in picker.available_places() {
        let mut line = describe(place);
        if let Some(position) = origin {
            line.push_str(&format!("  ({:.1} km)", distance(position, place.location)));
        }
        if picker.selection().contains(&place.id) {
            line.push_str("  [picked]");
        }
        write_line(output, &line)?;
    }
    Ok(())
}
