//! HTTP-based `Geolocator` backed by an IP geolocation JSON endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use placepicker_core::{Coordinate, GeolocationError, Geolocator};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::response::{LocationResponse, ResponseProblem};

/// Default endpoint queried for the current position.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Default user agent for geolocation requests.
pub const DEFAULT_USER_AGENT: &str = "placepicker/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while building an [`HttpGeolocator`].
#[derive(Debug, Error)]
pub enum HttpGeolocatorError {
    /// The endpoint was not a valid absolute URL.
    #[error("invalid geolocation URL {url:?}: {source}")]
    InvalidUrl {
        /// Rejected URL text.
        url: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The endpoint used a scheme other than HTTP(S).
    #[error("geolocation URL {url} must use http or https")]
    UnsupportedScheme {
        /// Rejected URL.
        url: Url,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`HttpGeolocator`].
#[derive(Debug, Clone)]
pub struct HttpGeolocatorConfig {
    /// Endpoint returning the caller's position as JSON.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpGeolocatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOLOCATION_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpGeolocatorConfig {
    /// Create a configuration for the given endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Geolocator resolving the current position from the caller's IP address.
///
/// The lookup runs on whichever async runtime awaits it. Failures map onto
/// [`GeolocationError`]: timeouts become `Timeout`, `401`/`403` responses
/// become `PermissionDenied` and everything else is `Unavailable`.
///
/// # Examples
///
/// ```no_run
/// use placepicker_core::{Geolocator, request_location};
/// use placepicker_data::HttpGeolocator;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let geolocator = HttpGeolocator::new("https://ipapi.co/json/")?;
/// let (pending, lookup) = request_location(geolocator);
/// lookup.await;
/// println!("{:?}", pending.wait().await);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpGeolocator {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpGeolocator {
    /// Create a geolocator for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HttpGeolocatorError> {
        Self::with_config(HttpGeolocatorConfig::new(base_url))
    }

    /// Create a geolocator from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: HttpGeolocatorConfig) -> Result<Self, HttpGeolocatorError> {
        let url = Url::parse(&config.base_url).map_err(|source| {
            HttpGeolocatorError::InvalidUrl {
                url: config.base_url.clone(),
                source,
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpGeolocatorError::UnsupportedScheme { url });
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(HttpGeolocatorError::HttpClient)?;
        Ok(Self {
            client,
            url,
            timeout: config.timeout,
        })
    }

    /// Endpoint queried by this geolocator.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> Result<LocationResponse, GeolocationError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(convert_status(status));
        }
        response
            .json()
            .await
            .map_err(|err| GeolocationError::Unavailable {
                message: format!("malformed response from {}: {err}", self.url),
            })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> GeolocationError {
        if error.is_timeout() {
            return GeolocationError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            };
        }
        GeolocationError::Unavailable {
            message: format!("request to {} failed: {error}", self.url),
        }
    }
}

#[async_trait]
impl Geolocator for HttpGeolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        debug!("requesting current position from {}", self.url);
        let body = self.fetch().await?;
        body.into_coordinate().map_err(convert_problem)
    }
}

fn convert_status(status: StatusCode) -> GeolocationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeolocationError::PermissionDenied,
        other => GeolocationError::Unavailable {
            message: format!("location service answered {other}"),
        },
    }
}

fn convert_problem(problem: ResponseProblem) -> GeolocationError {
    let message = match problem {
        ResponseProblem::Reported(reason) => format!("location service reported: {reason}"),
        ResponseProblem::Missing => "response did not include a position".to_owned(),
        ResponseProblem::OutOfRange => "response position is out of range".to_owned(),
    };
    GeolocationError::Unavailable { message }
}
