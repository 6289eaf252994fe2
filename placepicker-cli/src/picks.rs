//! `pick`, `remove` and `picked` commands over the persisted selection.

use std::io::{BufRead, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placepicker_core::{PlaceId, PlacePicker};
use placepicker_fs::FileStorage;
use serde::{Deserialize, Serialize};

use crate::session::{SessionConfig, describe, write_line};
use crate::{ARG_CATALOG, ARG_PLACE_ID, ARG_STORAGE_DIR, CliError, ENV_PLACE_ID};

/// CLI arguments for the `pick` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Add a place to the front of the picked list")]
#[ortho_config(prefix = "PLACEPICKER")]
pub(crate) struct PickArgs {
    /// Identifier of the place to pick.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) place_id: Option<String>,
    /// Path to a JSON catalog; the bundled catalog is used when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Directory holding the persisted selection.
    #[arg(long = ARG_STORAGE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) storage_dir: Option<Utf8PathBuf>,
}

/// CLI arguments for the `remove` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Remove a picked place. The command asks for confirmation \
                 on standard input unless --yes is given. Identifiers left in \
                 storage after leaving the catalog can be removed as well.",
    about = "Remove a picked place"
)]
#[ortho_config(prefix = "PLACEPICKER")]
pub(crate) struct RemoveArgs {
    /// Identifier of the place to remove.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) place_id: Option<String>,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    #[serde(default)]
    pub(crate) yes: bool,
    /// Path to a JSON catalog; the bundled catalog is used when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Directory holding the persisted selection.
    #[arg(long = ARG_STORAGE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) storage_dir: Option<Utf8PathBuf>,
}

/// CLI arguments for the `picked` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the picked places, newest first")]
#[ortho_config(prefix = "PLACEPICKER")]
pub(crate) struct PickedArgs {
    /// Path to a JSON catalog; the bundled catalog is used when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Directory holding the persisted selection.
    #[arg(long = ARG_STORAGE_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) storage_dir: Option<Utf8PathBuf>,
}

/// Resolved configuration for commands acting on one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceCommandConfig {
    pub(crate) session: SessionConfig,
    pub(crate) id: PlaceId,
    /// Whether removal skips the confirmation prompt.
    pub(crate) confirmed: bool,
}

fn require_place_id(place_id: Option<String>) -> Result<PlaceId, CliError> {
    place_id.map(PlaceId::from).ok_or(CliError::MissingArgument {
        field: ARG_PLACE_ID,
        env: ENV_PLACE_ID,
    })
}

impl TryFrom<PickArgs> for PlaceCommandConfig {
    type Error = CliError;

    fn try_from(args: PickArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_place_id(args.place_id)?,
            session: SessionConfig::new(args.catalog, args.storage_dir),
            confirmed: false,
        })
    }
}

impl TryFrom<RemoveArgs> for PlaceCommandConfig {
    type Error = CliError;

    fn try_from(args: RemoveArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_place_id(args.place_id)?,
            session: SessionConfig::new(args.catalog, args.storage_dir),
            confirmed: args.yes,
        })
    }
}

fn open_session(session: &SessionConfig) -> Result<PlacePicker<FileStorage>, CliError> {
    session.validate_sources()?;
    session.open()
}

pub(crate) fn run_pick(args: PickArgs, output: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = PlaceCommandConfig::try_from(merged)?;
    pick_with(&config, output)
}

pub(crate) fn pick_with(
    config: &PlaceCommandConfig,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let mut picker = open_session(&config.session)?;
    if picker.on_select_place(&config.id)? {
        write_line(output, &format!("Picked {}", config.id))?;
    } else {
        write_line(output, &format!("{} is already picked", config.id))?;
    }
    write_picked(&picker, output)
}

pub(crate) fn run_remove(
    args: RemoveArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = PlaceCommandConfig::try_from(merged)?;
    remove_with(&config, input, output)
}

pub(crate) fn remove_with(
    config: &PlaceCommandConfig,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let mut picker = open_session(&config.session)?;
    let (title, label) = removal_target(&picker, &config.id)?;

    picker.on_start_remove(config.id.clone());
    if config.confirmed || ask_confirmation(&title, input, output)? {
        picker.on_confirm_remove()?;
        write_line(output, &format!("Removed {label}"))?;
    } else {
        picker.on_cancel_remove();
        write_line(output, &format!("Kept {label}"))?;
    }
    write_picked(&picker, output)
}

/// Title and display label of the place `remove` acts on.
///
/// Identifiers still recorded in storage but no longer in the catalog can be
/// removed too; they are shown by identifier alone.
fn removal_target(
    picker: &PlacePicker<FileStorage>,
    id: &PlaceId,
) -> Result<(String, String), CliError> {
    if let Some(place) = picker.picked_places().iter().find(|place| &place.id == id) {
        return Ok((place.title.clone(), describe(place)));
    }
    if picker.selection().persisted_ids().contains(id) {
        debug!("removing stale stored id {id}");
        return Ok((id.to_string(), id.to_string()));
    }
    Err(CliError::NotPicked { id: id.clone() })
}

fn ask_confirmation(
    title: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<bool, CliError> {
    write!(output, "Do you really want to remove {title}? [y/N] ").map_err(CliError::WriteOutput)?;
    output.flush().map_err(CliError::WriteOutput)?;
    let mut answer = String::new();
    input.read_line(&mut answer).map_err(CliError::ReadInput)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

pub(crate) fn run_picked(args: PickedArgs, output: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let session = SessionConfig::new(merged.catalog, merged.storage_dir);
    let picker = open_session(&session)?;
    write_picked(&picker, output)
}

fn write_picked(picker: &PlacePicker<FileStorage>, output: &mut dyn Write) -> Result<(), CliError> {
    if let Some(text) = picker.picked_fallback_text() {
        return write_line(output, text);
    }
    write_line(output, "I'd like to visit ...")?;
    for place in picker.picked_places() {
        write_line(output, &describe(place))?;
    }
    Ok(())
}
