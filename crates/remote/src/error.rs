//! Remote-call error taxonomy.

use thiserror::Error;

/// Error surfaced by remote catalog calls.
///
/// This is the only failure kind the data layer exposes. There is no retry
/// policy anywhere in this crate: a failed call simply fails, and the caller
/// decides whether to issue it again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status code, when the failure came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
