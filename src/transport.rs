//! HTTP transport abstraction
//!
//! The client never talks to the network directly. It hands a fully-formed
//! URL to a [`Transport`], which performs a single GET and returns the raw
//! status code and body. The default implementation is backed by a blocking
//! reqwest client; tests inject scripted transports instead.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// User agent sent by [`ReqwestTransport`]
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Failure to complete an HTTP round-trip (connection, DNS, timeout, ...)
///
/// The message is whatever the underlying transport reported; the client
/// surfaces it unchanged.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    /// Creates a transport error carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the message reported by the transport
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

/// Raw outcome of a GET request that reached the server
///
/// Any status code is represented here, including 4xx and 5xx. Interpreting
/// the status is the client's job, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Unmodified response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A synchronous "GET this URL" capability
///
/// Implementations must be safe to call from several threads at once if the
/// client owning them is shared between threads. Timeouts and cancellation are
/// entirely the implementation's concern.
pub trait Transport {
    /// Performs one GET request against `url`
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no HTTP response was obtained.
    /// Error statuses must be returned as `Ok` with the status set.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// Transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default settings and no timeout
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Creates a transport whose requests give up after `timeout`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jikan_client::ReqwestTransport;
    /// use std::time::Duration;
    ///
    /// let transport = ReqwestTransport::with_timeout(Duration::from_secs(10)).unwrap();
    /// ```
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        log::trace!("{} from {} ({} bytes)", status, url, body.len());

        Ok(HttpResponse { status, body })
    }
}
