//! Color and brightness control for LIFX bulbs over the LIFX HTTP API.
//!
//! [`LifxApi::set_color`] asks the service whether a color string is valid and,
//! only if it is, pushes the new state to every light on the account or to a
//! single named group.

#[macro_use]
mod logging;
pub mod transport;

pub use logging::{LogSink, LOG_TARGET};
pub use transport::{ApiRequest, ApiResponse, Method, SurfTransport, Transport};

use log::Level;
use serde::Serialize;
use std::fmt::{self, Display};
use surf::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.lifx.com/v1";

pub const COLOR_DOCS_URL: &str = "https://api.developer.lifx.com/docs/colors";

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "invalid color value `{color}`. Refer to the LIFX API documentation for valid colors: {}",
        COLOR_DOCS_URL
    )]
    InvalidColor { color: String },
    #[error("http error occurred: {0}")]
    Http(surf::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl From<surf::Error> for Error {
    fn from(e: surf::Error) -> Self {
        Error::Http(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which lights a state change applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Group(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all"),
            Selector::Group(name) => write!(f, "group:{}", name),
        }
    }
}

impl<T: Into<String>> From<Option<T>> for Selector {
    fn from(group: Option<T>) -> Self {
        match group {
            Some(name) => Selector::Group(name.into()),
            None => Selector::All,
        }
    }
}

/// Body of a `PUT /lights/:selector/state` call.
///
/// Both fields are sent exactly as given; range checks on brightness and
/// color parsing are left to the service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StateRequest {
    pub color: String,
    pub brightness: String,
}

impl Display for StateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'color': '{}', 'brightness': '{}'}}",
            self.color, self.brightness
        )
    }
}

pub struct LifxApi<T = SurfTransport> {
    token: String,
    base_url: String,
    transport: T,
    sink: LogSink,
}

impl LifxApi<SurfTransport> {
    pub fn new<S: AsRef<str>>(token: S) -> Self {
        LifxApi::with_transport(token, SurfTransport::new(), LogSink::global())
    }
}

impl<T: Transport> LifxApi<T> {
    pub fn with_transport<S: AsRef<str>>(token: S, transport: T, sink: LogSink) -> Self {
        LifxApi {
            token: token.as_ref().into(),
            base_url: DEFAULT_API_URL.into(),
            transport,
            sink,
        }
    }

    /// Points the client at a different API root, e.g. a proxy.
    pub fn with_base_url<S: AsRef<str>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
    }

    async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        self.transport
            .send(ApiRequest {
                method,
                url,
                token: self.token.clone(),
                body,
            })
            .await
    }

    /// Asks the service whether `color` is a color string it understands.
    ///
    /// A 200 answer means valid and any other status means invalid. Failing to
    /// reach the service is reported as [`Error::Http`], never as `false`.
    pub async fn validate_color<S: AsRef<str>>(&self, color: S) -> Result<bool> {
        let color = color.as_ref();
        let mut url = self.url("color")?;
        url.query_pairs_mut().append_pair("string", color);

        emit!(self.sink, Level::Info, "Validating color --- {{'string': '{}'}}", color);
        let response = self.request(Method::Get, url, None).await?;
        emit!(self.sink, Level::Debug, "Validate color response: {}", response);

        Ok(response.status == 200)
    }

    /// Validates `color`, then sets it with `brightness` on every light, or
    /// only on `group` when one is given.
    ///
    /// The state update's own status is logged but not checked: a request the
    /// service answers at all counts as done.
    pub async fn set_color<S: AsRef<str>, B: AsRef<str>>(
        &self,
        color: S,
        brightness: B,
        group: Option<&str>,
    ) -> Result<()> {
        let color = color.as_ref();
        if !self.validate_color(color).await? {
            return Err(Error::InvalidColor {
                color: color.into(),
            });
        }

        let selector = Selector::from(group);
        let state = StateRequest {
            color: color.into(),
            brightness: brightness.as_ref().into(),
        };
        let url = self.url(&format!("lights/{}/state", selector))?;

        match &selector {
            Selector::All => {
                emit!(self.sink, Level::Info, "Setting color for all lights --- {}", state)
            }
            Selector::Group(_) => {
                emit!(self.sink, Level::Info, "Setting color for {} --- {}", selector, state)
            }
        }
        let response = self
            .request(Method::Put, url, Some(serde_json::to_value(&state)?))
            .await?;
        emit!(self.sink, Level::Debug, "Set color response: {}", response);
        if !response.is_success() {
            emit!(
                self.sink,
                Level::Warn,
                "state update for {} answered with status {}; not treated as a failure",
                selector,
                response.status
            );
        }

        Ok(())
    }
}
