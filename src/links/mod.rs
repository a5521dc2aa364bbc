//! Link analysis module
//!
//! This module contains the concurrent link-analysis engine:
//! - prober: HEAD probes with a single GET fallback on 405
//! - orchestrator: resolution, the fixed worker pool, and aggregation

mod orchestrator;
mod prober;

pub use orchestrator::{analyze_links, probe_links, LinkCounts, LinkVerdict, DEFAULT_WORKERS};
pub use prober::{ProbeOutcome, Prober, DEFAULT_PROBE_TIMEOUT};
