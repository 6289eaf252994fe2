//! The single location request issued at startup.

use std::future::Future;

use log::{debug, info, warn};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::Coordinate;

use super::provider::Geolocator;

/// Outcome of polling a [`PendingLocation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationStatus {
    /// The request is still outstanding.
    Pending,
    /// The position arrived; reported exactly once.
    Ready(Coordinate),
    /// The request failed or was abandoned; reported exactly once.
    Unavailable,
    /// The outcome was already reported by an earlier poll.
    Settled,
}

/// Receiving half of a one-shot location request.
#[derive(Debug)]
pub struct PendingLocation {
    receiver: Option<oneshot::Receiver<Coordinate>>,
}

impl PendingLocation {
    /// Check for the position without blocking.
    pub fn poll(&mut self) -> LocationStatus {
        let Some(receiver) = self.receiver.as_mut() else {
            return LocationStatus::Settled;
        };
        match receiver.try_recv() {
            Ok(position) => {
                self.receiver = None;
                LocationStatus::Ready(position)
            }
            Err(TryRecvError::Empty) => LocationStatus::Pending,
            Err(TryRecvError::Closed) => {
                self.receiver = None;
                LocationStatus::Unavailable
            }
        }
    }

    /// Wait for the position, yielding `None` if it never arrives.
    pub async fn wait(mut self) -> Option<Coordinate> {
        let receiver = self.receiver.take()?;
        receiver.await.ok()
    }

    /// Whether an outcome is still to be reported.
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        self.receiver.is_some()
    }
}

/// Issue the one-shot location request.
///
/// Returns the receiving handle and the future that queries `geolocator`.
/// The caller spawns or awaits the future; it resolves the handle on success
/// and drops it on failure, which [`PendingLocation::poll`] reports as
/// [`LocationStatus::Unavailable`].
///
/// # Examples
/// ```
/// use placepicker_core::{Coordinate, FixedGeolocator, LocationStatus, request_location};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let position = Coordinate::new(44.5588, -80.344);
/// let (mut pending, lookup) = request_location(FixedGeolocator::new(position));
/// assert_eq!(pending.poll(), LocationStatus::Pending);
///
/// lookup.await;
/// assert_eq!(pending.poll(), LocationStatus::Ready(position));
/// assert_eq!(pending.poll(), LocationStatus::Settled);
/// # }
/// ```
pub fn request_location<G>(geolocator: G) -> (PendingLocation, impl Future<Output = ()> + Send)
where
    G: Geolocator + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let lookup = async move {
        match geolocator.current_position().await {
            Ok(position) => {
                info!(
                    "current position resolved to {}, {}",
                    position.latitude, position.longitude
                );
                if sender.send(position).is_err() {
                    debug!("location arrived after its receiver was dropped");
                }
            }
            Err(err) => warn!("places stay in catalog order: {err}"),
        }
    };
    (
        PendingLocation {
            receiver: Some(receiver),
        },
        lookup,
    )
}
