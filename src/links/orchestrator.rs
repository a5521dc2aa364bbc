//! Link analysis orchestration
//!
//! Wires extraction, resolution, and probing together:
//! 1. Scan the document once for `<base href>` and candidate hrefs
//! 2. Resolve and classify each candidate against the page URL
//! 3. Feed resolved links to a fixed pool of probe workers through a queue
//! 4. Fold every verdict into the aggregate counts in a single aggregator

use super::prober::{ProbeOutcome, Prober};
use crate::html::scan_html;
use crate::url::{resolve_document_base, resolve_link, LinkClass, ResolvedLink};
use crate::AnalyzerError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use url::Url;

/// Number of concurrent probe workers
pub const DEFAULT_WORKERS: usize = 10;

/// Terminal result for one probed link
#[derive(Debug, Clone)]
pub struct LinkVerdict {
    pub url: Url,
    pub class: LinkClass,
    pub outcome: ProbeOutcome,
}

impl LinkVerdict {
    pub fn is_reachable(&self) -> bool {
        self.outcome.is_reachable()
    }
}

/// Aggregate link counts for one page
///
/// `internal + external` is the number of links that were resolved and
/// probed. `broken` counts failed probes across both classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    pub broken: usize,
}

impl LinkCounts {
    /// Folds one verdict into the counts
    pub fn record(&mut self, verdict: &LinkVerdict) {
        match verdict.class {
            LinkClass::Internal => self.internal += 1,
            LinkClass::External => self.external += 1,
        }
        if !verdict.is_reachable() {
            self.broken += 1;
        }
    }

    /// Number of links that were classified
    pub fn total(&self) -> usize {
        self.internal + self.external
    }
}

/// Analyzes the links of an HTML document
///
/// # Arguments
///
/// * `prober` - Shared prober used by every worker
/// * `body` - The HTML document
/// * `base_url` - The URL the document was fetched from
/// * `workers` - Size of the probe worker pool
///
/// # Returns
///
/// * `Ok(LinkCounts)` - Counts over every non-skipped candidate
/// * `Err(AnalyzerError::BadBaseUrl)` - `base_url` could not be parsed
pub async fn analyze_links(
    prober: &Prober,
    body: &str,
    base_url: &str,
    workers: usize,
) -> Result<LinkCounts, AnalyzerError> {
    let facts = scan_html(body);

    let page_url = Url::parse(base_url).map_err(|source| AnalyzerError::BadBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let document_base = resolve_document_base(facts.base_href.as_deref(), &page_url);
    if let Some(base) = &document_base {
        tracing::debug!("Resolving relative links against <base href> {}", base);
    }

    let links: Vec<ResolvedLink> = facts
        .hrefs
        .iter()
        .filter_map(|href| resolve_link(href, document_base.as_ref(), &page_url))
        .collect();

    tracing::debug!(
        "Resolved {} of {} candidate links on {}",
        links.len(),
        facts.hrefs.len(),
        page_url
    );

    let counts = probe_links(prober, links, workers).await;

    tracing::info!(
        "Link analysis for {}: {} internal, {} external, {} broken",
        page_url,
        counts.internal,
        counts.external,
        counts.broken
    );

    Ok(counts)
}

/// Probes resolved links with a fixed-size worker pool and aggregates verdicts
///
/// Workers drain a shared queue in arbitrary order and send verdicts to the
/// caller, which owns the counts. Returns immediately when `links` is empty.
pub async fn probe_links(prober: &Prober, links: Vec<ResolvedLink>, workers: usize) -> LinkCounts {
    if links.is_empty() {
        return LinkCounts::default();
    }

    let (job_tx, job_rx) = mpsc::channel::<ResolvedLink>(links.len());
    for link in links {
        // Capacity equals the number of links, so this never waits.
        if job_tx.send(link).await.is_err() {
            break;
        }
    }
    drop(job_tx);

    let jobs = Arc::new(Mutex::new(job_rx));
    let (verdict_tx, mut verdict_rx) = mpsc::unbounded_channel::<LinkVerdict>();

    let mut pool = JoinSet::new();
    for worker_id in 0..workers.max(1) {
        let jobs = Arc::clone(&jobs);
        let verdicts = verdict_tx.clone();
        let prober = prober.clone();

        pool.spawn(async move {
            loop {
                let next = jobs.lock().await.recv().await;
                let Some(link) = next else {
                    break;
                };

                let outcome = prober.probe(&link.url).await;
                tracing::debug!(worker = worker_id, "{} -> {:?}", link.url, outcome);

                let verdict = LinkVerdict {
                    url: link.url,
                    class: link.class,
                    outcome,
                };
                if verdicts.send(verdict).is_err() {
                    break;
                }
            }
        });
    }
    drop(verdict_tx);

    let mut counts = LinkCounts::default();
    while let Some(verdict) = verdict_rx.recv().await {
        if !verdict.is_reachable() {
            tracing::debug!("Broken link {}: {:?}", verdict.url, verdict.outcome);
        }
        counts.record(&verdict);
    }

    while let Some(joined) = pool.join_next().await {
        if let Err(e) = joined {
            tracing::warn!("Probe worker failed: {}", e);
        }
    }

    counts
}
