//! Page analysis report
//!
//! This module handles:
//! - Running the full request flow for one target URL
//! - The result record handed to the presentation layer
//! - Rendering that record as text or JSON

mod render;

pub use render::{render_json, render_text};

use crate::analyzer::PageAnalysis;
use crate::url::validate_url;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything reported about one analyzed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageAnalysisResult {
    /// The URL as submitted
    pub url: String,

    /// Human-readable headline, e.g. "Analyzing: https://example.com"
    pub message: String,

    pub html_version: String,
    pub title: String,

    /// `h1`..`h6` counts; only tags that occur are present
    pub headings: BTreeMap<String, usize>,

    pub internal_links: usize,
    pub external_links: usize,
    pub broken_links: usize,

    /// False when link analysis failed and the link counts are not meaningful
    pub links_available: bool,

    pub has_login_form: bool,

    pub analyzed_at: DateTime<Utc>,
}

/// Analyzes one page end to end
///
/// # Flow
///
/// 1. Validate the target URL
/// 2. Fetch the page; a fetch failure aborts with no partial metrics
/// 3. Extract HTML version, title, headings, and login-form flag
/// 4. Analyze links; on failure log a warning and keep the other metrics
///
/// # Returns
///
/// * `Ok(PageAnalysisResult)` - The page was fetched
/// * `Err(AnalyzerError::InvalidUrl)` - The URL failed validation
/// * `Err(AnalyzerError::FetchFailed)` - The page could not be fetched
pub async fn analyze_page<A: PageAnalysis>(analysis: &A, url: &str) -> Result<PageAnalysisResult> {
    let url = url.trim();
    validate_url(url)?;

    tracing::info!("Received URL for analysis: {}", url);

    let body = analysis.fetch_html(url).await.map_err(|e| {
        tracing::error!("Failed to fetch HTML: {}", e);
        e
    })?;

    let html_version = analysis.detect_html_version(&body);
    let title = analysis.extract_title(&body);
    let headings = analysis.count_headings(&body);
    let has_login_form = analysis.detect_login_form(&body);

    let (counts, links_available) = match analysis.analyze_links(&body, url).await {
        Ok(counts) => (counts, true),
        Err(e) => {
            tracing::warn!("Link analysis failed: {}", e);
            (Default::default(), false)
        }
    };

    Ok(PageAnalysisResult {
        url: url.to_string(),
        message: format!("Analyzing: {}", url),
        html_version,
        title,
        headings,
        internal_links: counts.internal,
        external_links: counts.external,
        broken_links: counts.broken,
        links_available,
        has_login_form,
        analyzed_at: Utc::now(),
    })
}

/// Message shown when the page could not be fetched
pub fn fetch_failure_message(reason: &str) -> String {
    format!("Unable to fetch the provided URL. Reason: {}", reason)
}
