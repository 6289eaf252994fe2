//! The user's picked places and their persisted projection.
//!
//! [`SelectionStore`] owns the in-memory, newest-first list of picked places
//! and is the only writer of the persisted identifier list stored under
//! [`SELECTED_PLACES_KEY`]. Every [`Command`] updates both synchronously.
//!
//! Persisted content is treated leniently: an absent key, an empty value,
//! malformed JSON or identifiers no longer present in the catalog all degrade
//! to "not selected" instead of failing.

use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::{Catalog, Place, PlaceId, SelectionStorage, StorageError};

/// Storage key holding the JSON array of selected identifiers.
pub const SELECTED_PLACES_KEY: &str = "selectedPlaces";

/// Mutation requests accepted by [`SelectionStore::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a place to the front of the selection unless already present.
    Select(PlaceId),
    /// Drop a place from the selection.
    Remove(PlaceId),
}

/// Errors returned while mutating a [`SelectionStore`].
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The identifier does not name a catalog entry.
    #[error("place {id} is not in the catalog")]
    UnknownPlace {
        /// Identifier that failed to resolve.
        id: PlaceId,
    },
    /// The identifier list could not be encoded.
    #[error("failed to encode selected places: {0}")]
    Encode(#[source] serde_json::Error),
    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Ordered, duplicate-free selection mirrored to a [`SelectionStorage`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use placepicker_core::{
///     Catalog, Command, Coordinate, MemoryStorage, Place, PlaceId, SelectionStorage,
///     SelectionStore, SELECTED_PLACES_KEY,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Arc::new(Catalog::new(vec![
///     Place::new("a", "Alpha", Coordinate::new(0.0, 0.0)),
///     Place::new("b", "Beta", Coordinate::new(1.0, 1.0)),
/// ])?);
/// let mut store = SelectionStore::load(catalog, MemoryStorage::default());
///
/// store.apply(Command::Select(PlaceId::from("a")))?;
/// store.apply(Command::Select(PlaceId::from("b")))?;
///
/// let ids: Vec<_> = store.ids().map(PlaceId::as_str).collect();
/// assert_eq!(ids, vec!["b", "a"]);
/// assert_eq!(
///     store.storage().get(SELECTED_PLACES_KEY)?.as_deref(),
///     Some(r#"["b","a"]"#)
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SelectionStore<S> {
    catalog: Arc<Catalog>,
    storage: S,
    picked: Vec<Place>,
}

impl<S: SelectionStorage> SelectionStore<S> {
    /// Derive the selection from whatever `storage` currently holds.
    ///
    /// Identifiers missing from `catalog` and repeated identifiers are
    /// skipped. Unreadable or malformed storage yields an empty selection.
    #[must_use]
    pub fn load(catalog: Arc<Catalog>, storage: S) -> Self {
        let mut picked: Vec<Place> = Vec::new();
        for id in read_persisted(&storage) {
            if picked.iter().any(|place| place.id == id) {
                continue;
            }
            match catalog.get(&id) {
                Some(place) => picked.push(place.clone()),
                None => debug!("dropping stale selected place {id}: not in catalog"),
            }
        }
        Self {
            catalog,
            storage,
            picked,
        }
    }

    /// Apply a command, returning whether the in-memory selection changed.
    pub fn apply(&mut self, command: Command) -> Result<bool, SelectionError> {
        match command {
            Command::Select(id) => self.select(&id),
            Command::Remove(id) => self.remove(&id),
        }
    }

    /// Prepend `id` to the selection.
    ///
    /// Already-selected identifiers are ignored without touching storage.
    /// The persisted list is only rewritten when it does not yet record `id`.
    pub fn select(&mut self, id: &PlaceId) -> Result<bool, SelectionError> {
        if self.contains(id) {
            return Ok(false);
        }
        let place = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownPlace { id: id.clone() })?;
        self.picked.insert(0, place);

        let mut stored = read_persisted(&self.storage);
        if !stored.contains(id) {
            stored.insert(0, id.clone());
            self.write_persisted(&stored)?;
        }
        Ok(true)
    }

    /// Remove `id` from the selection and from storage.
    ///
    /// Storage is rewritten even when `id` was not selected.
    pub fn remove(&mut self, id: &PlaceId) -> Result<bool, SelectionError> {
        let before = self.picked.len();
        self.picked.retain(|place| &place.id != id);
        let changed = self.picked.len() != before;

        let mut stored = read_persisted(&self.storage);
        stored.retain(|stored_id| stored_id != id);
        self.write_persisted(&stored)?;
        Ok(changed)
    }

    /// Identifiers currently recorded in storage, newest first.
    ///
    /// Unlike [`SelectionStore::ids`], this includes identifiers that no
    /// longer resolve against the catalog.
    #[must_use]
    pub fn persisted_ids(&self) -> Vec<PlaceId> {
        read_persisted(&self.storage)
    }

    fn write_persisted(&mut self, ids: &[PlaceId]) -> Result<(), SelectionError> {
        let encoded = serde_json::to_string(ids).map_err(SelectionError::Encode)?;
        self.storage
            .set(SELECTED_PLACES_KEY, &encoded)
            .inspect_err(|err| warn!("selection change not persisted: {err}"))?;
        Ok(())
    }
}

impl<S> SelectionStore<S> {
    /// Picked places, newest first.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.picked
    }

    /// Picked identifiers, newest first.
    pub fn ids(&self) -> impl Iterator<Item = &PlaceId> {
        self.picked.iter().map(|place| &place.id)
    }

    /// Whether `id` is currently picked.
    #[must_use]
    pub fn contains(&self, id: &PlaceId) -> bool {
        self.picked.iter().any(|place| &place.id == id)
    }

    /// Number of picked places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    /// Whether nothing is picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Catalog the selection resolves against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Read-only access to the storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_persisted<S: SelectionStorage + ?Sized>(storage: &S) -> Vec<PlaceId> {
    let raw = match storage.get(SELECTED_PLACES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("treating selection as empty: {err}");
            return Vec::new();
        }
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Option<Vec<PlaceId>>>(&raw) {
        Ok(ids) => ids.unwrap_or_default(),
        Err(err) => {
            warn!("ignoring malformed {SELECTED_PLACES_KEY} value: {err}");
            Vec::new()
        }
    }
}
