//! Test helpers for running CLI commands against a temporary workspace.

use super::*;
use camino::Utf8PathBuf;
use placepicker_core::{Coordinate, FixedGeolocator, Geolocator, test_support::FailingGeolocator};
use std::io::Cursor;
use tempfile::TempDir;

/// Catalog written into every workspace: `far` is listed before `near`.
const CATALOG_JSON: &str = r#"[
  {"id": "far", "title": "Far Lighthouse", "lat": 0.0, "lon": 9.0},
  {"id": "near", "title": "Near Meadow", "lat": 0.0, "lon": 1.0}
]"#;

/// Geolocator doubles handed to the `places` command.
#[derive(Debug, Clone, Copy)]
pub(super) enum StubGeolocators {
    Reports(Coordinate),
    Denies,
}

impl GeolocatorBuilder for StubGeolocators {
    fn build(&self, _url: &str) -> Result<Box<dyn Geolocator>, CliError> {
        Ok(match self {
            Self::Reports(position) => Box::new(FixedGeolocator::new(*position)),
            Self::Denies => Box::new(FailingGeolocator::denied()),
        })
    }
}

/// Temporary directory holding a catalog file and the selection storage.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) catalog: Utf8PathBuf,
    pub(super) storage_dir: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("places.json");
        std::fs::write(&catalog, CATALOG_JSON).expect("write catalog");
        Self {
            _dir: dir,
            catalog,
            storage_dir: root.join("state"),
        }
    }

    /// Run `placepicker <args> --catalog .. --storage-dir ..` and capture
    /// standard output.
    pub(super) fn run(
        &self,
        args: &[&str],
        geolocators: &StubGeolocators,
        answer: &str,
    ) -> (Result<(), CliError>, String) {
        let mut argv = vec!["placepicker".to_owned()];
        argv.extend(args.iter().map(|arg| (*arg).to_owned()));
        argv.extend([
            format!("--{ARG_CATALOG}"),
            self.catalog.to_string(),
            format!("--{ARG_STORAGE_DIR}"),
            self.storage_dir.to_string(),
        ]);
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = Cli::try_parse_from(argv)
            .map_err(CliError::from)
            .and_then(|cli| run_with(cli, geolocators, &mut input, &mut output));
        let stdout = String::from_utf8(output).expect("stdout utf-8");
        (result, stdout)
    }
}

/// Position of the first output line starting with `id`.
pub(super) fn line_of(stdout: &str, id: &str) -> usize {
    stdout
        .lines()
        .position(|line| line.starts_with(&format!("{id}  ")))
        .unwrap_or_else(|| panic!("no line for {id} in {stdout:?}"))
}
