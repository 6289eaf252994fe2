//! Directory-backed [`SelectionStorage`].
//!
//! Each key maps to `<key>.json` inside the storage directory. Writes go to
//! a temporary sibling first and are renamed into place, so readers never
//! observe a half-written value.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use log::debug;
use placepicker_core::{SelectionStorage, StorageError};

use crate::ensure_dir;

/// Selection storage persisting each key as a file under one directory.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use placepicker_core::SelectionStorage;
/// use placepicker_fs::FileStorage;
///
/// let mut storage = FileStorage::open(Utf8Path::new(".placepicker"))?;
/// storage.set("selectedPlaces", r#"["p1"]"#)?;
/// assert_eq!(storage.get("selectedPlaces")?.as_deref(), Some(r#"["p1"]"#));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct FileStorage {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileStorage {
    /// Open the storage directory at `root`, creating it when missing.
    pub fn open(root: &Utf8Path) -> io::Result<Self> {
        let dir = ensure_dir(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Directory holding the stored values.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn write_value(&self, file_name: &str, value: &str) -> io::Result<()> {
        let temp_name = format!(".{file_name}.tmp");
        let mut file = self.dir.create(&temp_name)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        self.dir.rename(&temp_name, &self.dir, file_name)
    }
}

fn file_name_for(key: &str) -> io::Result<String> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if valid {
        Ok(format!("{key}.json"))
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("storage key {key:?} must be non-empty ASCII letters, digits, '-' or '_'"),
        ))
    }
}

impl SelectionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_error = |source| StorageError::Read {
            key: key.to_owned(),
            source,
        };
        let file_name = file_name_for(key).map_err(read_error)?;
        match self.dir.read_to_string(&file_name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no stored value for {key} under {}", self.root);
                Ok(None)
            }
            Err(err) => Err(read_error(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |source| StorageError::Write {
            key: key.to_owned(),
            source,
        };
        let file_name = file_name_for(key).map_err(write_error)?;
        self.write_value(&file_name, value).map_err(write_error)
    }
}
