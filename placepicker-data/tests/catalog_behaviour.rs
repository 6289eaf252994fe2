//! Behavioural coverage for catalog loading.

use std::cell::RefCell;
use std::sync::Arc;

use camino::Utf8PathBuf;
use placepicker_core::{Catalog, CatalogError, Coordinate, MemoryStorage, PlacePicker};
use placepicker_data::{LoadCatalogError, bundled_catalog, load_catalog};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

type PickerCell = RefCell<Option<PlacePicker<MemoryStorage>>>;
type LoadCell = RefCell<Option<Result<Catalog, LoadCatalogError>>>;

#[fixture]
fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("create temporary directory: {err}"),
    }
}

#[fixture]
fn picker() -> PickerCell {
    RefCell::new(None)
}

#[fixture]
fn loaded() -> LoadCell {
    RefCell::new(None)
}

fn catalog_path(temp_dir: &TempDir) -> Utf8PathBuf {
    match Utf8PathBuf::from_path_buf(temp_dir.path().join("places.json")) {
        Ok(path) => path,
        Err(path) => panic!("temporary path {} is not UTF-8", path.display()),
    }
}

#[given("the bundled catalog")]
fn the_bundled_catalog(picker: &PickerCell) {
    let catalog = match bundled_catalog() {
        Ok(catalog) => catalog,
        Err(err) => panic!("bundled catalog: {err}"),
    };
    *picker.borrow_mut() = Some(PlacePicker::new(Arc::new(catalog), MemoryStorage::default()));
}

fn write_catalog(temp_dir: &TempDir, first: &str, second: &str) {
    let json = format!(
        r#"[{{"id":"{first}","title":"{first}","lat":10.0,"lon":0.0}},{{"id":"{second}","title":"{second}","lat":-10.0,"lon":0.0}}]"#
    );
    if let Err(err) = std::fs::write(catalog_path(temp_dir), json) {
        panic!("write catalog file: {err}");
    }
}

#[given("a catalog file with places north and south")]
fn north_and_south(temp_dir: &TempDir) {
    write_catalog(temp_dir, "north", "south");
}

#[given("a catalog file that repeats an id")]
fn repeated_id(temp_dir: &TempDir) {
    write_catalog(temp_dir, "twin", "twin");
}

#[when("the user is located at the Forest Waterfall")]
fn located_at_waterfall(picker: &PickerCell) {
    let mut guard = picker.borrow_mut();
    let Some(session) = guard.as_mut() else {
        panic!("session must be open");
    };
    assert!(session.apply_location(Coordinate::new(44.5588, -80.344)));
}

#[when("the catalog file is loaded")]
fn load_file(temp_dir: &TempDir, loaded: &LoadCell) {
    *loaded.borrow_mut() = Some(load_catalog(&catalog_path(temp_dir)));
}

#[then("the first available place is the Forest Waterfall")]
fn first_is_waterfall(picker: &PickerCell) {
    let guard = picker.borrow();
    let Some(session) = guard.as_ref() else {
        panic!("session must be open");
    };
    let first = session.available_places().first().map(|p| p.title.clone());
    assert_eq!(first.as_deref(), Some("Forest Waterfall"));
}

#[then("every bundled place is available")]
fn every_place_available(picker: &PickerCell) {
    let guard = picker.borrow();
    let Some(session) = guard.as_ref() else {
        panic!("session must be open");
    };
    assert_eq!(session.available_places().len(), session.catalog().len());
}

#[then("the catalog lists north then south")]
fn lists_north_then_south(loaded: &LoadCell) {
    let guard = loaded.borrow();
    let catalog = match guard.as_ref() {
        Some(Ok(catalog)) => catalog,
        Some(Err(err)) => panic!("catalog should load: {err}"),
        None => panic!("catalog was not loaded"),
    };
    let ids: Vec<_> = catalog.places().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["north", "south"]);
}

#[then("loading fails because of a duplicate id")]
fn duplicate_rejected(loaded: &LoadCell) {
    let guard = loaded.borrow();
    assert!(matches!(
        guard.as_ref(),
        Some(Err(LoadCatalogError::Invalid {
            source: CatalogError::DuplicateId { .. },
            ..
        }))
    ));
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn bundled_catalog_sorts(picker: PickerCell) {
    let _ = picker;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn catalog_file_loads_in_order(temp_dir: TempDir, loaded: LoadCell) {
    let _ = (temp_dir, loaded);
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn repeated_ids_rejected(temp_dir: TempDir, loaded: LoadCell) {
    let _ = (temp_dir, loaded);
}
