//! Command-line interface for browsing and picking places.
#![forbid(unsafe_code)]

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand, error::ErrorKind};

mod error;
mod picks;
mod places;
mod session;

pub use error::CliError;

use picks::{PickArgs, PickedArgs, RemoveArgs, run_pick, run_picked, run_remove};
use places::{DefaultGeolocatorBuilder, GeolocatorBuilder, PlacesArgs, run_places};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_STORAGE_DIR: &str = "storage-dir";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LON: &str = "lon";
pub(crate) const ARG_LOCATE: &str = "locate";
pub(crate) const ARG_GEOLOCATION_URL: &str = "geolocation-url";
pub(crate) const ARG_PLACE_ID: &str = "place-id";
pub(crate) const ENV_LAT: &str = "PLACEPICKER_LAT";
pub(crate) const ENV_LON: &str = "PLACEPICKER_LON";
pub(crate) const ENV_PLACE_ID: &str = "PLACEPICKER_PLACE_ID";

/// Directory holding persisted selections when none is configured.
pub const DEFAULT_STORAGE_DIR: &str = ".placepicker";

/// Run the CLI with the current process arguments, standard input and
/// standard output.
///
/// `--help` and `--version` print their text and exit the process
/// successfully; other parse failures are returned as
/// [`CliError::ArgumentParsing`].
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    run_with(cli, &DefaultGeolocatorBuilder, &mut input, &mut output)
}

/// Whether clap stopped parsing to show help or version text rather than
/// because the arguments were wrong.
fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn run_with(
    cli: Cli,
    geolocators: &dyn GeolocatorBuilder,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    match cli.command {
        Command::Places(args) => run_places(args, geolocators, output),
        Command::Pick(args) => run_pick(args, output),
        Command::Remove(args) => run_remove(args, input, output),
        Command::Picked(args) => run_picked(args, output),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placepicker",
    about = "Browse places, sort them by distance and keep a list of places to visit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available places, nearest first once a position is known.
    Places(PlacesArgs),
    /// Add a place to the front of the picked list.
    Pick(PickArgs),
    /// Remove a picked place after confirmation.
    Remove(RemoveArgs),
    /// Show the picked places, newest first.
    Picked(PickedArgs),
}

#[cfg(test)]
mod tests;
