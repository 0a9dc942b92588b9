//! PingList - sequential URL probing library
//!
//! This crate probes a list of endpoints one at a time and collects a
//! uniform [`ProbeRecord`] per endpoint: status, server identity, body size
//! and page title. Network failures never abort a batch; they become
//! "could not connect" records instead.
//!
//! ## Pipeline
//!
//! 1. [`normalize`] turns raw strings into [`Endpoint`]s
//! 2. [`BatchProber`] fetches each endpoint through a [`Transport`]
//! 3. A [`ProgressReporter`] is notified after every probe
//! 4. [`format_with`] renders the records in a [`RenderFormat`]

pub mod endpoint;
mod error;
pub mod format;
mod html;
pub mod progress;
pub mod prober;
pub mod transport;
mod types;

pub use endpoint::{collect_endpoints, normalize, read_endpoints, Endpoint};
pub use error::{FetchError, FormatError};
pub use format::{format_with, format_with_name, RenderFormat};
pub use html::extract_title;
pub use progress::{render_progress, ProgressReporter, SilentProgress, TerminalProgress};
pub use prober::{BatchProber, ProbeOptions};
pub use transport::{HttpTransport, Transport};
pub use types::{ProbeRecord, RawResponse};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = concat!("pinglist/", env!("CARGO_PKG_VERSION"));

/// Status message recorded when an endpoint could not be fetched
pub const COULD_NOT_CONNECT: &str = "could not connect";

/// Server value recorded when the response carries no `Server` header
pub const UNKNOWN_SERVER: &str = "UNKNOWN";
