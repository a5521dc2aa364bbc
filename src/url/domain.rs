use url::Url;

/// Extracts the bare hostname from a URL
///
/// The port is not part of the result, so `example.com:8080` and
/// `example.com` yield the same host. The `url` crate already lowercases
/// domain hosts during parsing.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(&str)` - The non-empty host
/// * `None` - If the URL has no host (e.g. `mailto:`, `file:///`)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pagescope::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com"));
/// ```
pub fn extract_host(url: &Url) -> Option<&str> {
    url.host_str().filter(|h| !h.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_host() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com"));
    }

    #[test]
    fn test_extract_with_port() {
        let url = Url::parse("http://localhost:8080/").unwrap();
        assert_eq!(extract_host(&url), Some("localhost"));
    }

    #[test]
    fn test_extract_uppercase_is_normalized() {
        let url = Url::parse("https://Example.COM/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com"));
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("file:///etc/hosts").unwrap();
        assert_eq!(extract_host(&url), None);

        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(extract_host(&url), None);
    }
}
