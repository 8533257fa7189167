//! Error types for the task API client.
//!
//! # Design
//! HTTP status codes are not errors here: the scenarios assert on 400 and
//! 404 as normal outcomes, so statuses travel inside [`crate::HttpResponse`].
//! `HttpError` only appears where a method promises a parsed result (list
//! fetching) and the server answered with something other than 200.

use thiserror::Error;

/// Failures surfaced by [`crate::TaskClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request exceeded the fixed per-request timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be completed at the transport level
    /// (connection refused, DNS failure, broken stream).
    #[error("transport error: {0}")]
    Transport(String),

    /// A method that requires a 200 response received something else.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Classify a `ureq` transport failure, pulling timeouts out into their
    /// own variant.
    pub(crate) fn from_transport(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => ApiError::Timeout,
            other => ApiError::Transport(other.to_string()),
        }
    }
}
