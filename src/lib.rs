//! Pagescope: single-page structure and link inspector
//!
//! This crate fetches one web page and reports its structural metrics: title,
//! heading counts, HTML version, login-form presence, and a classification of
//! its links (internal/external/broken) based on live reachability probes.

pub mod analyzer;
pub mod config;
pub mod html;
pub mod links;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for page analysis
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Invalid base URL '{url}': {source}")]
    BadBaseUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("{0}")]
    InvalidUrl(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors from validating a target URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    Parse(String),

    #[error("Only HTTP and HTTPS URLs are supported, got: {0}")]
    InvalidScheme(String),

    #[error("URL must contain a host")]
    MissingHost,
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analyzer::{PageAnalysis, PageAnalyzer};
pub use config::Config;
pub use links::{analyze_links, LinkCounts};
pub use report::{analyze_page, PageAnalysisResult};
pub use crate::url::{resolve_link, validate_url, LinkClass, ResolvedLink};
