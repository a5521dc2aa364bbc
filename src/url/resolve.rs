use super::domain::extract_host;
use url::{ParseError, Url};

/// Schemes that are never resolved, counted, or probed
pub const SKIPPED_SCHEMES: &[&str] = &["mailto", "tel", "javascript"];

/// Whether a link stays on the analyzed page's host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    Internal,
    External,
}

/// A candidate href resolved to an absolute URL and classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub url: Url,
    pub class: LinkClass,
}

/// Returns true if the scheme is one of the skipped schemes
///
/// The comparison is exact; `Url::parse` has already lowercased the scheme.
pub fn is_skipped_scheme(scheme: &str) -> bool {
    SKIPPED_SCHEMES.contains(&scheme)
}

/// Checks whether a raw href is worth resolving
///
/// Absolute URLs with an allowed scheme and relative references qualify.
/// Skipped schemes and hrefs that cannot be parsed do not.
pub fn is_candidate_href(href: &str) -> bool {
    match Url::parse(href) {
        Ok(parsed) => !is_skipped_scheme(parsed.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Checks whether a `<base href>` value can serve as the document base
///
/// Empty and whitespace-only values are rejected, as are values that parse
/// neither as an absolute URL nor as a relative reference.
pub fn is_usable_base_href(base_href: &str) -> bool {
    let base_href = base_href.trim();
    if base_href.is_empty() {
        return false;
    }
    matches!(
        Url::parse(base_href),
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase)
    )
}

/// Resolves a raw href against the document base (if any) or the page URL
///
/// # Resolution
///
/// - Absolute hrefs are used as-is unless their scheme is skipped.
/// - Relative hrefs are joined onto `document_base` when the page declared a
///   usable `<base href>`, otherwise onto `page_url`.
/// - Unparsable hrefs yield `None` and are excluded from every count.
///
/// # Classification
///
/// The link is [`LinkClass::Internal`] when the resolved URL has no host or
/// its bare hostname equals the page's hostname. Ports are ignored.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pagescope::url::{resolve_link, LinkClass};
///
/// let page = Url::parse("http://localhost").unwrap();
/// let link = resolve_link("/about", None, &page).unwrap();
/// assert_eq!(link.url.as_str(), "http://localhost/about");
/// assert_eq!(link.class, LinkClass::Internal);
///
/// assert!(resolve_link("mailto:x@example.com", None, &page).is_none());
/// ```
pub fn resolve_link(href: &str, document_base: Option<&Url>, page_url: &Url) -> Option<ResolvedLink> {
    let url = match Url::parse(href) {
        Ok(parsed) => {
            if is_skipped_scheme(parsed.scheme()) {
                return None;
            }
            parsed
        }
        Err(ParseError::RelativeUrlWithoutBase) => {
            document_base.unwrap_or(page_url).join(href).ok()?
        }
        Err(_) => return None,
    };

    let class = match extract_host(&url) {
        None => LinkClass::Internal,
        Some(host) if Some(host) == extract_host(page_url) => LinkClass::Internal,
        Some(_) => LinkClass::External,
    };

    Some(ResolvedLink { url, class })
}

/// Resolves the document's `<base href>` against the page URL
///
/// A relative base is joined onto the page URL. An empty or unparsable base
/// is ignored so relative links fall back to the page URL.
pub fn resolve_document_base(base_href: Option<&str>, page_url: &Url) -> Option<Url> {
    let base_href = base_href?.trim();
    if !is_usable_base_href(base_href) {
        return None;
    }

    match page_url.join(base_href) {
        Ok(base) => Some(base),
        Err(e) => {
            tracing::debug!("Ignoring unusable <base href=\"{}\">: {}", base_href, e);
            None
        }
    }
}
