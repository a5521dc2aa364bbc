use crate::{UrlError, UrlResult};
use url::{ParseError, Url};

/// Validates a user-supplied target URL before any network I/O
///
/// # Rules
///
/// 1. Must be non-empty
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
/// 4. Must contain a host
///
/// # Examples
///
/// ```
/// use pagescope::url::validate_url;
///
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(raw: &str) -> UrlResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(raw).map_err(|e| match e {
        ParseError::EmptyHost => UrlError::MissingHost,
        other => UrlError::Parse(other.to_string()),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
