//! HTTP client construction and page fetching

use crate::config::UserAgentConfig;
use crate::AnalyzerError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for fetching the page under analysis
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared HTTP client
///
/// The client carries the fetch timeout as its default; probes override it
/// per request.
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `timeout` - Default request timeout
///
/// # Example
///
/// ```no_run
/// use pagescope::analyzer::{build_http_client, DEFAULT_FETCH_TIMEOUT};
/// use pagescope::config::UserAgentConfig;
///
/// let client = build_http_client(&UserAgentConfig::default(), DEFAULT_FETCH_TIMEOUT).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its decoded body
///
/// # Returns
///
/// * `Ok(String)` - Body of a 2xx response
/// * `Err(AnalyzerError::FetchFailed)` - Transport error, non-2xx status
///   (the status line is included in the reason), or unreadable body
pub async fn fetch_html(client: &Client, url: &str, timeout: Duration) -> Result<String, AnalyzerError> {
    let fetch_failed = |reason: String| AnalyzerError::FetchFailed {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                fetch_failed(format!("request timed out after {}s", timeout.as_secs()))
            } else {
                fetch_failed(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_failed(format!(
            "received non-2xx status code: {}",
            status
        )));
    }

    response
        .text()
        .await
        .map_err(|e| fetch_failed(format!("failed to read response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), DEFAULT_FETCH_TIMEOUT);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = Client::new();
        let result = fetch_html(&client, "http://127.0.0.1:1/", DEFAULT_FETCH_TIMEOUT).await;
        assert!(matches!(result, Err(AnalyzerError::FetchFailed { .. })));
    }
}
