//! Error definitions shared across the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the header selector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Selection was attempted over an empty candidate set.
    #[error("invalid argument: candidate list is empty")]
    InvalidArgument,
}

/// Errors raised while building a candidate list or a fixed header value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// No candidates were supplied.
    #[error("candidate list must not be empty")]
    Empty,

    /// Fixed mode was requested without a value.
    #[error("a fixed User-Agent value is required")]
    MissingValue,

    /// A candidate is not a usable header field value.
    #[error("candidate #{index} is not a valid header value: {value:?}")]
    InvalidValue { index: usize, value: String },
}

/// Errors raised by the rotating HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request failed in transport or while decoding the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}
