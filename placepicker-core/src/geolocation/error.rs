use thiserror::Error;

/// Errors from [`crate::Geolocator::current_position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The user or platform refused access to the location.
    #[error("permission to read the current position was denied")]
    PermissionDenied,
    /// The location service could not produce a position.
    #[error("current position is unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
    /// The location service gave up waiting.
    #[error("timed out after {timeout_secs}s waiting for the current position")]
    Timeout {
        /// Timeout applied by the location service.
        timeout_secs: u64,
    },
}
