//! Top-level error type returned by every client call.

use crate::status::StatusErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Errors that can occur while fetching a resource
///
/// The three arms are disjoint: a call fails in the transport, is rejected by
/// its status code, or returns a body that cannot be decoded.
#[derive(Debug, Error)]
pub enum JikanError {
    /// No HTTP response was obtained
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with one of its documented failure statuses
    #[error(transparent)]
    Status(#[from] StatusErrorKind),

    /// The body was not valid JSON for the requested record
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl JikanError {
    /// The classified failure kind, if the API rejected the request
    pub fn status_kind(&self) -> Option<StatusErrorKind> {
        match self {
            JikanError::Status(kind) => Some(*kind),
            _ => None,
        }
    }
}
