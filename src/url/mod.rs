//! URL handling module for Pagescope
//!
//! This module provides target URL validation, host extraction, and the
//! resolver/classifier that turns raw hrefs into absolute, classified links.

mod domain;
mod resolve;
mod validate;

// Re-export main functions
pub use domain::extract_host;
pub use resolve::{
    is_candidate_href, is_skipped_scheme, is_usable_base_href, resolve_document_base,
    resolve_link, LinkClass, ResolvedLink, SKIPPED_SCHEMES,
};
pub use validate::validate_url;
