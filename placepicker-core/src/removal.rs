//! Two-step removal: request, then confirm or cancel.

use crate::PlaceId;

/// State of the removal confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemovalState {
    /// No removal awaits confirmation.
    #[default]
    Idle,
    /// The user asked to remove this place and has not answered yet.
    PendingRemoval(PlaceId),
}

/// Tracks at most one pending removal.
///
/// Starting a removal while one is pending replaces the pending id. Confirm
/// and cancel both return to [`RemovalState::Idle`].
///
/// # Examples
/// ```
/// use placepicker_core::{PlaceId, RemovalFlow};
///
/// let mut flow = RemovalFlow::default();
/// flow.start(PlaceId::from("a"));
/// flow.start(PlaceId::from("b"));
/// assert!(flow.is_open());
///
/// assert_eq!(flow.confirm(), Some(PlaceId::from("b")));
/// assert!(!flow.is_open());
/// assert_eq!(flow.confirm(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalFlow {
    state: RemovalState,
}

impl RemovalFlow {
    /// Ask for confirmation before removing `id`.
    pub fn start(&mut self, id: PlaceId) {
        self.state = RemovalState::PendingRemoval(id);
    }

    /// Abandon any pending removal.
    pub fn cancel(&mut self) {
        self.state = RemovalState::Idle;
    }

    /// Close the dialog and hand back the id that should be removed.
    #[must_use = "the returned id must be removed from the selection"]
    pub fn confirm(&mut self) -> Option<PlaceId> {
        match std::mem::take(&mut self.state) {
            RemovalState::PendingRemoval(id) => Some(id),
            RemovalState::Idle => None,
        }
    }

    /// Whether the confirmation dialog should be shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, RemovalState::PendingRemoval(_))
    }

    /// The id awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PlaceId> {
        match &self.state {
            RemovalState::PendingRemoval(id) => Some(id),
            RemovalState::Idle => None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &RemovalState {
        &self.state
    }
}
