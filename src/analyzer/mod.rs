//! Page analysis facade
//!
//! Exposes the capability set the request flow consumes: fetching a page,
//! extracting its title and headings, detecting a login form and the HTML
//! version, and analyzing its links. The HTTP client is an explicit
//! dependency so tests can point it at a fake server.

mod fetch;

pub use fetch::{build_http_client, fetch_html, DEFAULT_FETCH_TIMEOUT};

use crate::config::Config;
use crate::html;
use crate::links::{self, LinkCounts, Prober, DEFAULT_PROBE_TIMEOUT, DEFAULT_WORKERS};
use crate::Result;
use reqwest::Client;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

/// Operations offered to the request flow
pub trait PageAnalysis {
    /// Fetches the page body
    fn fetch_html(&self, url: &str) -> impl Future<Output = Result<String>> + Send;

    /// Returns the text of the first `<title>`, or an empty string
    fn extract_title(&self, body: &str) -> String;

    /// Counts `h1`..`h6` start tags
    fn count_headings(&self, body: &str) -> BTreeMap<String, usize>;

    /// Reports whether the page has a login form
    fn detect_login_form(&self, body: &str) -> bool;

    /// Classifies the HTML version from its DOCTYPE
    fn detect_html_version(&self, body: &str) -> String;

    /// Counts internal, external, and broken links
    fn analyze_links(
        &self,
        body: &str,
        base_url: &str,
    ) -> impl Future<Output = Result<LinkCounts>> + Send;
}

/// Timeouts and pool size used by [`PageAnalyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    pub fetch_timeout: Duration,
    pub probe_timeout: Duration,
    pub workers: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl From<&Config> for AnalyzerSettings {
    fn from(config: &Config) -> Self {
        Self {
            fetch_timeout: Duration::from_secs(config.analyzer.fetch_timeout_secs),
            probe_timeout: Duration::from_secs(config.analyzer.probe_timeout_secs),
            workers: config.analyzer.workers,
        }
    }
}

/// Network-backed implementation of [`PageAnalysis`]
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    client: Client,
    settings: AnalyzerSettings,
}

impl PageAnalyzer {
    /// Creates an analyzer with default settings
    ///
    /// When `client` is `None` a default client is built with the fetch
    /// timeout. Pass a client to substitute the transport.
    pub fn new(client: Option<Client>) -> Result<Self> {
        let settings = AnalyzerSettings::default();
        let client = match client {
            Some(client) => client,
            None => build_http_client(&Default::default(), settings.fetch_timeout)?,
        };
        Ok(Self::with_settings(client, settings))
    }

    /// Creates an analyzer from an explicit client and settings
    pub fn with_settings(client: Client, settings: AnalyzerSettings) -> Self {
        Self { client, settings }
    }

    /// Creates an analyzer from configuration, building its own client
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = AnalyzerSettings::from(config);
        let client = build_http_client(&config.user_agent, settings.fetch_timeout)?;
        Ok(Self::with_settings(client, settings))
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    fn prober(&self) -> Prober {
        Prober::new(self.client.clone(), self.settings.probe_timeout)
    }
}

impl PageAnalysis for PageAnalyzer {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        fetch_html(&self.client, url, self.settings.fetch_timeout).await
    }

    fn extract_title(&self, body: &str) -> String {
        html::extract_title(body)
    }

    fn count_headings(&self, body: &str) -> BTreeMap<String, usize> {
        html::count_headings(body)
    }

    fn detect_login_form(&self, body: &str) -> bool {
        html::detect_login_form(body)
    }

    fn detect_html_version(&self, body: &str) -> String {
        html::detect_html_version(body).to_string()
    }

    async fn analyze_links(&self, body: &str, base_url: &str) -> Result<LinkCounts> {
        links::analyze_links(&self.prober(), body, base_url, self.settings.workers).await
    }
}
