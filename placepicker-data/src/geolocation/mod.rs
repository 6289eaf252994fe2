//! Position lookup over HTTP.
//!
//! [`HttpGeolocator`] implements [`placepicker_core::Geolocator`] by asking an
//! IP geolocation service for the caller's approximate position. Responses
//! may name their fields `latitude`/`longitude` or `lat`/`lon`.
//!
//! ```no_run
//! use std::time::Duration;
//! use placepicker_data::{HttpGeolocator, HttpGeolocatorConfig};
//!
//! let config = HttpGeolocatorConfig::new("https://ipapi.co/json/")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let geolocator = HttpGeolocator::with_config(config)?;
//! # Ok::<(), placepicker_data::HttpGeolocatorError>(())
//! ```

mod provider;
mod response;

pub use provider::{
    DEFAULT_GEOLOCATION_URL, DEFAULT_USER_AGENT, HttpGeolocator, HttpGeolocatorConfig,
    HttpGeolocatorError,
};
