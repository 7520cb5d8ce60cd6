//! Error types for the TodoStore client.
//!
//! # Design
//! Every failure surfaces as an `ApiError` value returned to the immediate
//! caller. The variants follow the order in which a call can fail: input
//! validation and request construction happen before any I/O, then the
//! context check, the transport, the status check and finally decoding.
//!
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `HttpError` with the raw status code
//! and body for debugging.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `Client` and the `Todos` resource.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An input failed validation. No request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The base address or a request path could not be turned into a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The HTTP round-trip failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport gave up waiting for the server.
    #[error("request timed out")]
    Timeout,

    /// The caller cancelled the context before the request was sent.
    #[error("request cancelled")]
    Cancelled,

    /// The context deadline passed before the request was sent.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// True for errors raised before any request was attempted because an
    /// argument was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => ApiError::Timeout,
            ureq::Error::BadUri(msg) => ApiError::InvalidUrl(msg),
            other => ApiError::Transport(other.to_string()),
        }
    }
}
