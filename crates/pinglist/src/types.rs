//! Core types for PingList

use crate::endpoint::Endpoint;
use crate::html::extract_title;
use crate::{COULD_NOT_CONNECT, UNKNOWN_SERVER};
use bytes::Bytes;

/// Response data returned by a [`Transport`](crate::Transport)
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Reason phrase for the status code
    pub status_message: String,
    /// `Server` header value, if present
    pub server: Option<String>,
    /// Full received body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response with the given status and reason phrase
    pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            ..Default::default()
        }
    }

    /// Set the `Server` header value
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// Metadata collected for one endpoint
///
/// `status_code == 0` means the fetch did not complete; in that case the
/// title is the URL, the server is [`UNKNOWN_SERVER`] and the content
/// length is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    /// The normalized endpoint
    pub url: String,
    /// Page title, or the URL when no title is available
    pub title: String,
    /// HTTP status code, `0` when the endpoint could not be reached
    pub status_code: u16,
    /// Reason phrase, or [`COULD_NOT_CONNECT`] on failure
    pub status_message: String,
    /// Server identity, or [`UNKNOWN_SERVER`]
    pub server: String,
    /// Received body length in bytes
    pub content_length: u64,
}

impl ProbeRecord {
    /// Sentinel record for an endpoint that could not be fetched
    pub fn unreachable(endpoint: &Endpoint) -> Self {
        Self {
            url: endpoint.to_string(),
            title: endpoint.to_string(),
            status_code: 0,
            status_message: COULD_NOT_CONNECT.to_string(),
            server: UNKNOWN_SERVER.to_string(),
            content_length: 0,
        }
    }

    /// Build a record from a completed response
    ///
    /// The content length is the received body size, not the declared
    /// `Content-Length` header.
    pub fn from_response(endpoint: &Endpoint, response: &RawResponse) -> Self {
        let body = String::from_utf8_lossy(&response.body);
        let title = extract_title(&body).unwrap_or_else(|| {
            tracing::debug!(url = %endpoint, "No title found, using URL");
            endpoint.to_string()
        });

        Self {
            url: endpoint.to_string(),
            title,
            status_code: response.status_code,
            status_message: response.status_message.clone(),
            server: response
                .server
                .clone()
                .unwrap_or_else(|| UNKNOWN_SERVER.to_string()),
            content_length: response.body.len() as u64,
        }
    }

    /// Returns true if the endpoint could not be fetched
    pub fn is_unreachable(&self) -> bool {
        self.status_code == 0
    }
}
