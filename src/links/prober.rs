//! Reachability prober
//!
//! This module decides whether a resolved link is reachable:
//! - Sends a HEAD request (no body download) with a per-request timeout
//! - Falls back to a single GET when the server answers 405 Method Not Allowed
//! - Treats network errors, timeouts, and status >= 400 as broken

use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Default per-link probe timeout
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of probing a single link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a status below 400
    Reachable(u16),

    /// The server answered with a status of 400 or above
    HttpError(u16),

    /// The request did not complete within the probe timeout
    Timeout,

    /// Connection, DNS, TLS, or other transport failure
    NetworkError(String),
}

impl ProbeOutcome {
    /// Returns true if the link should not be counted as broken
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

/// Probes links over a shared HTTP client
///
/// Cloning is cheap: the underlying connection pool is shared, so one prober
/// can be handed to every worker.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    timeout: Duration,
}

impl Prober {
    /// Creates a prober that uses the given client and per-request timeout
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Probes a URL for reachability
    ///
    /// # Request Flow
    ///
    /// | HEAD result | Action |
    /// |-------------|--------|
    /// | status < 400 | Reachable |
    /// | 405 | One GET; its result decides |
    /// | other status >= 400 | Broken |
    /// | error / timeout | Broken |
    pub async fn probe(&self, url: &Url) -> ProbeOutcome {
        let head = self
            .client
            .head(url.as_str())
            .timeout(self.timeout)
            .send()
            .await;

        match head {
            Ok(response) if response.status() == StatusCode::METHOD_NOT_ALLOWED => {
                tracing::debug!("HEAD not allowed for {}, retrying with GET", url);
                let get = self
                    .client
                    .get(url.as_str())
                    .timeout(self.timeout)
                    .send()
                    .await;
                match get {
                    Ok(response) => classify_status(response.status()),
                    Err(e) => classify_error(e),
                }
            }
            Ok(response) => classify_status(response.status()),
            Err(e) => classify_error(e),
        }
    }
}

/// Maps a response status to a probe outcome
fn classify_status(status: StatusCode) -> ProbeOutcome {
    if status.as_u16() >= 400 {
        ProbeOutcome::HttpError(status.as_u16())
    } else {
        ProbeOutcome::Reachable(status.as_u16())
    }
}

/// Maps a transport error to a probe outcome
fn classify_error(error: reqwest::Error) -> ProbeOutcome {
    if error.is_timeout() {
        ProbeOutcome::Timeout
    } else if error.is_connect() {
        ProbeOutcome::NetworkError(format!("Connection failed: {}", error))
    } else {
        ProbeOutcome::NetworkError(error.to_string())
    }
}
