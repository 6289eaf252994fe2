//! Session controller tying the catalog view, selection and removal dialog
//! together behind the event entry points a presentation layer calls.

use std::sync::Arc;

use log::debug;

use crate::{
    Catalog, Command, Coordinate, LocationStatus, PendingLocation, Place, PlaceId, RemovalFlow,
    SelectionError, SelectionStorage, SelectionStore, sort_by_distance,
};

/// Fallback shown in place of the available list while sorting is pending.
pub const SORTING_FALLBACK_TEXT: &str = "Sorting places by distance...";

/// Fallback shown in place of the picked list when nothing is selected.
pub const EMPTY_SELECTION_FALLBACK_TEXT: &str =
    "Select the places you would like to visit below.";

/// State behind a PlacePicker screen.
///
/// The available list starts in catalog order and is replaced, once, by the
/// distance-sorted order when a position arrives. Selections and removals
/// go through the [`SelectionStore`], which persists every change.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use placepicker_core::{Catalog, Coordinate, MemoryStorage, Place, PlaceId, PlacePicker};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Arc::new(Catalog::new(vec![
///     Place::new("far", "Far", Coordinate::new(0.0, 9.0)),
///     Place::new("near", "Near", Coordinate::new(0.0, 1.0)),
/// ])?);
/// let mut picker = PlacePicker::new(catalog, MemoryStorage::default());
/// assert!(picker.is_sorting());
///
/// picker.apply_location(Coordinate::new(0.0, 0.0));
/// assert_eq!(picker.available_places()[0].id.as_str(), "near");
///
/// picker.on_select_place(&PlaceId::from("far"))?;
/// picker.on_start_remove(PlaceId::from("far"));
/// picker.on_confirm_remove()?;
/// assert!(picker.picked_places().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PlacePicker<S> {
    catalog: Arc<Catalog>,
    sorted: Option<Vec<Place>>,
    location: Option<PendingLocation>,
    location_attached: bool,
    selection: SelectionStore<S>,
    removal: RemovalFlow,
}

impl<S: SelectionStorage> PlacePicker<S> {
    /// Start a session, deriving the selection from `storage`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, storage: S) -> Self {
        let selection = SelectionStore::load(Arc::clone(&catalog), storage);
        Self {
            catalog,
            sorted: None,
            location: None,
            location_attached: false,
            selection,
            removal: RemovalFlow::default(),
        }
    }

    /// Add a place to the front of the picked list.
    pub fn on_select_place(&mut self, id: &PlaceId) -> Result<bool, SelectionError> {
        self.selection.apply(Command::Select(id.clone()))
    }

    /// Open the removal dialog for `id`.
    pub fn on_start_remove(&mut self, id: PlaceId) {
        self.removal.start(id);
    }

    /// Close the removal dialog without removing anything.
    pub fn on_cancel_remove(&mut self) {
        self.removal.cancel();
    }

    /// Close the removal dialog and remove the pending place.
    ///
    /// Returns whether a picked place was removed. With no pending removal
    /// this does nothing.
    pub fn on_confirm_remove(&mut self) -> Result<bool, SelectionError> {
        match self.removal.confirm() {
            Some(id) => self.selection.apply(Command::Remove(id)),
            None => {
                debug!("removal confirmed with no pending place");
                Ok(false)
            }
        }
    }
}

impl<S> PlacePicker<S> {
    /// Hand over the session's location request.
    ///
    /// Only the first request is kept; later ones are dropped.
    pub fn attach_location(&mut self, pending: PendingLocation) {
        if self.location_attached || self.sorted.is_some() {
            debug!("ignoring additional location request");
            return;
        }
        self.location_attached = true;
        self.location = Some(pending);
    }

    /// Poll the attached location request and sort once it resolves.
    ///
    /// Returns `true` when this call published the sorted view.
    pub fn refresh_location(&mut self) -> bool {
        let Some(pending) = self.location.as_mut() else {
            return false;
        };
        match pending.poll() {
            LocationStatus::Ready(origin) => {
                self.location = None;
                self.apply_location(origin)
            }
            LocationStatus::Pending => false,
            LocationStatus::Unavailable | LocationStatus::Settled => {
                self.location = None;
                false
            }
        }
    }

    /// Sort the available list by distance from `origin`.
    ///
    /// Only the first position is used; returns whether it was applied.
    pub fn apply_location(&mut self, origin: Coordinate) -> bool {
        if self.sorted.is_some() {
            debug!("ignoring position after places were already sorted");
            return false;
        }
        self.sorted = Some(sort_by_distance(self.catalog.places(), origin));
        true
    }

    /// Places offered for selection: sorted once a position is known,
    /// otherwise in catalog order.
    #[must_use]
    pub fn available_places(&self) -> &[Place] {
        self.sorted
            .as_deref()
            .unwrap_or_else(|| self.catalog.places())
    }

    /// Picked places, newest first.
    #[must_use]
    pub fn picked_places(&self) -> &[Place] {
        self.selection.places()
    }

    /// Whether the available list is still waiting for a position.
    #[must_use]
    pub const fn is_sorting(&self) -> bool {
        self.sorted.is_none()
    }

    /// Text to show alongside the available list while sorting is pending.
    #[must_use]
    pub const fn available_fallback_text(&self) -> Option<&'static str> {
        if self.is_sorting() {
            Some(SORTING_FALLBACK_TEXT)
        } else {
            None
        }
    }

    /// Text to show instead of an empty picked list.
    #[must_use]
    pub fn picked_fallback_text(&self) -> Option<&'static str> {
        self.selection
            .is_empty()
            .then_some(EMPTY_SELECTION_FALLBACK_TEXT)
    }

    /// Whether the removal dialog is open.
    #[must_use]
    pub const fn is_removal_open(&self) -> bool {
        self.removal.is_open()
    }

    /// Place awaiting removal confirmation.
    #[must_use]
    pub const fn pending_removal(&self) -> Option<&PlaceId> {
        self.removal.pending()
    }

    /// The session's selection store.
    #[must_use]
    pub const fn selection(&self) -> &SelectionStore<S> {
        &self.selection
    }

    /// The session's catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FixedGeolocator, GeolocationError, MemoryStorage, request_location,
        test_support::{FailingGeolocator, equator_catalog},
    };
    use rstest::{fixture, rstest};

    fn unreachable() -> FailingGeolocator {
        FailingGeolocator::new(GeolocationError::Unavailable {
            message: "no fix".to_owned(),
        })
    }

    #[fixture]
    fn picker() -> PlacePicker<MemoryStorage> {
        let catalog = equator_catalog(&[("a", 5.0), ("b", 1.0), ("c", 3.0)]).expect("distinct ids");
        PlacePicker::new(Arc::new(catalog), MemoryStorage::default())
    }

    fn available(picker: &PlacePicker<MemoryStorage>) -> Vec<&str> {
        picker
            .available_places()
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[rstest]
    fn unsorted_catalog_shown_with_fallback_until_located(picker: PlacePicker<MemoryStorage>) {
        assert_eq!(available(&picker), vec!["a", "b", "c"]);
        assert_eq!(picker.available_fallback_text(), Some(SORTING_FALLBACK_TEXT));
        assert_eq!(
            picker.picked_fallback_text(),
            Some(EMPTY_SELECTION_FALLBACK_TEXT)
        );
    }

    #[rstest]
    fn only_first_position_sorts(mut picker: PlacePicker<MemoryStorage>) {
        assert!(picker.apply_location(Coordinate::new(0.0, 0.0)));
        assert!(!picker.apply_location(Coordinate::new(0.0, 6.0)));
        assert_eq!(available(&picker), vec!["b", "c", "a"]);
        assert_eq!(picker.available_fallback_text(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn attached_request_sorts_on_refresh(mut picker: PlacePicker<MemoryStorage>) {
        let (pending, lookup) = request_location(FixedGeolocator::new(Coordinate::new(0.0, 0.0)));
        picker.attach_location(pending);
        assert!(!picker.refresh_location());
        lookup.await;
        assert!(picker.refresh_location());
        assert_eq!(available(&picker), vec!["b", "c", "a"]);
        assert!(!picker.refresh_location());
    }

    #[rstest]
    #[tokio::test]
    async fn failed_request_leaves_catalog_order(mut picker: PlacePicker<MemoryStorage>) {
        let (pending, lookup) = request_location(unreachable());
        picker.attach_location(pending);
        lookup.await;
        assert!(!picker.refresh_location());
        assert!(picker.is_sorting());
        assert_eq!(available(&picker), vec!["a", "b", "c"]);
    }

    #[rstest]
    #[tokio::test]
    async fn second_request_is_ignored(mut picker: PlacePicker<MemoryStorage>) {
        let (first, _first_lookup) = request_location(unreachable());
        let (second, second_lookup) =
            request_location(FixedGeolocator::new(Coordinate::new(0.0, 0.0)));
        picker.attach_location(first);
        picker.attach_location(second);
        second_lookup.await;
        assert!(!picker.refresh_location());
        assert!(picker.is_sorting());
    }

    #[rstest]
    fn selections_are_usable_while_sorting(mut picker: PlacePicker<MemoryStorage>) {
        picker.on_select_place(&PlaceId::from("c")).expect("select");
        assert!(picker.is_sorting());
        assert_eq!(picker.picked_places().len(), 1);
        assert_eq!(picker.picked_fallback_text(), None);
    }

    #[rstest]
    fn confirm_without_pending_removal_is_harmless(mut picker: PlacePicker<MemoryStorage>) {
        picker.on_select_place(&PlaceId::from("a")).expect("select");
        assert!(!picker.on_confirm_remove().expect("confirm"));
        assert_eq!(picker.picked_places().len(), 1);
    }
}
