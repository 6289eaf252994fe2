//! Catalog and storage settings shared by every command.

use std::{io::Write, sync::Arc};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use placepicker_core::{Catalog, Place, PlacePicker};
use placepicker_data::{bundled_catalog, load_catalog};
use placepicker_fs::FileStorage;

use crate::{ARG_CATALOG, CliError, DEFAULT_STORAGE_DIR};

/// Resolved catalog and storage locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionConfig {
    /// Catalog file; `None` selects the bundled catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Directory holding the persisted selection.
    pub(crate) storage_dir: Utf8PathBuf,
}

impl SessionConfig {
    pub(crate) fn new(catalog: Option<Utf8PathBuf>, storage_dir: Option<Utf8PathBuf>) -> Self {
        Self {
            catalog,
            storage_dir: storage_dir.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORAGE_DIR)),
        }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.catalog {
            Some(path) => require_existing(path, ARG_CATALOG),
            None => Ok(()),
        }
    }

    pub(crate) fn load_catalog(&self) -> Result<Catalog, CliError> {
        let catalog = match &self.catalog {
            Some(path) => load_catalog(path)?,
            None => bundled_catalog()?,
        };
        debug!("catalog holds {} places", catalog.len());
        Ok(catalog)
    }

    /// Open a picker session over the configured catalog and storage.
    pub(crate) fn open(&self) -> Result<PlacePicker<FileStorage>, CliError> {
        let catalog = Arc::new(self.load_catalog()?);
        let storage =
            FileStorage::open(&self.storage_dir).map_err(|source| CliError::OpenStorage {
                path: self.storage_dir.clone(),
                source,
            })?;
        Ok(PlacePicker::new(catalog, storage))
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match placepicker_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn write_line(output: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writeln!(output, "{line}").map_err(CliError::WriteOutput)
}

pub(crate) fn describe(place: &Place) -> String {
    format!("{}  {}", place.id, place.title)
}
