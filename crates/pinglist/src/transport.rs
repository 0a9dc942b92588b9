//! HTTP transport seam
//!
//! The prober talks to the network only through [`Transport`], so tests
//! can substitute scripted responses and failures.

use crate::error::FetchError;
use crate::types::RawResponse;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderValue, SERVER, USER_AGENT};
use std::time::Duration;

/// Trait for issuing a single GET request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Identifier for this transport (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Fetch `url` with a GET request, bounded by `timeout`
    ///
    /// Any network-layer failure, including timeout, is returned as an error.
    async fn get(&self, url: &str, timeout: Duration) -> Result<RawResponse, FetchError>;
}

/// Transport backed by a shared reqwest client
///
/// Redirects follow reqwest's default policy.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default User-Agent
    pub fn new() -> Result<Self, FetchError> {
        Self::with_user_agent(None)
    }

    /// Create a transport with an optional custom User-Agent
    pub fn with_user_agent(user_agent: Option<&str>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let user_agent = user_agent.unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::ClientBuildError)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        // hyper keeps the phrase only when it differs from the canonical one
        let status_message = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
            .or_else(|| status.canonical_reason().map(|s| s.to_string()))
            .unwrap_or_default();
        let server = response
            .headers()
            .get(SERVER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // The request timeout also bounds the body read
        let body = response.bytes().await.map_err(FetchError::from_reqwest)?;

        Ok(RawResponse {
            status_code: status.as_u16(),
            status_message,
            server,
            body,
        })
    }
}
