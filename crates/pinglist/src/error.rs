//! Error types for PingList

use thiserror::Error;

/// Errors that can occur while fetching a single endpoint
///
/// These never escape a batch probe; the prober turns them into
/// "could not connect" records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Response headers arrived but the body could not be read
    #[error("Failed to read response body")]
    BodyError(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),
}

impl FetchError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::ConnectError(err)
        } else if err.is_body() || err.is_decode() {
            FetchError::BodyError(err)
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors raised while selecting a render format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The format selector names no known format
    #[error("Invalid format: {0:?} (expected one of csv, list, md, table, none)")]
    InvalidFormat(String),
}
