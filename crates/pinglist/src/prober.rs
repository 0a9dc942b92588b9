//! Batch prober
//!
//! Design: endpoints are probed strictly one at a time, in order. Every
//! endpoint yields exactly one record; network failures are converted
//! into "could not connect" records and never abort the batch.

use crate::endpoint::Endpoint;
use crate::progress::ProgressReporter;
use crate::transport::Transport;
use crate::types::ProbeRecord;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Probe configuration
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Per-request timeout, covering connect, headers and body
    pub timeout: Duration,
    /// Pause before every request, including the first
    pub delay: Duration,
    /// Skip progress reporting
    pub silent: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delay: Duration::ZERO,
            silent: false,
        }
    }
}

impl ProbeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the inter-request delay
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Suppress progress reporting
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

/// Sequential prober over a [`Transport`]
pub struct BatchProber<T: Transport> {
    transport: T,
    options: ProbeOptions,
}

impl<T: Transport> BatchProber<T> {
    /// Create a prober
    pub fn new(transport: T, options: ProbeOptions) -> Self {
        Self { transport, options }
    }

    /// The options this prober was built with
    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    /// Probe every endpoint in order, returning one record per endpoint
    ///
    /// `progress` is notified after each record unless the options are
    /// silent.
    pub async fn probe_all(
        &self,
        endpoints: &[Endpoint],
        progress: &mut dyn ProgressReporter,
    ) -> Vec<ProbeRecord> {
        let total = endpoints.len();
        let mut records = Vec::with_capacity(total);

        for (index, endpoint) in endpoints.iter().enumerate() {
            if !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }

            let record = self.probe_one(endpoint).await;
            debug!(
                transport = self.transport.name(),
                index,
                url = %endpoint,
                status_code = record.status_code,
                "Probed endpoint"
            );
            records.push(record);

            if !self.options.silent {
                progress.report(index + 1, total);
            }
        }

        records
    }

    /// Probe a single endpoint without delay or progress reporting
    pub async fn probe_one(&self, endpoint: &Endpoint) -> ProbeRecord {
        match self
            .transport
            .get(endpoint.as_str(), self.options.timeout)
            .await
        {
            Ok(response) => ProbeRecord::from_response(endpoint, &response),
            Err(e) => {
                debug!(url = %endpoint, error = %e, "Could not connect");
                ProbeRecord::unreachable(endpoint)
            }
        }
    }
}
