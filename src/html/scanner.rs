//! Streaming HTML scanner
//!
//! Walks the token stream of a document once and records the structural facts
//! needed for analysis. No DOM tree is built: element and text events are
//! handled as the tokenizer emits them.

use crate::url::{is_candidate_href, is_usable_base_href};
use html_escape::decode_html_entities;
use lol_html::{element, text, EndTagHandler, HtmlRewriter, Settings};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Structural facts collected from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFacts {
    /// Text following the first `<title>` start tag (empty if absent or unclosed)
    pub title: String,

    /// Start-tag counts for `h1`..`h6`, keyed by lowercase tag name
    pub headings: BTreeMap<String, usize>,

    /// `href` of the first `<base>` element with a usable value
    pub base_href: Option<String>,

    /// Candidate hrefs from `<a>` and `<link>`, in document order
    pub hrefs: Vec<String>,

    /// True if a password input or a login-looking form was seen
    pub has_login_form: bool,
}

#[derive(Default)]
struct ScanState {
    facts: PageFacts,
    titles_seen: usize,
    title_text: String,
    title_closed: bool,
}

impl ScanState {
    fn on_element(&mut self, tag: &str, attr: impl Fn(&str) -> Option<String>) {
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                *self.facts.headings.entry(tag.to_string()).or_insert(0) += 1;
            }
            "a" | "link" => {
                if let Some(href) = attr("href") {
                    if is_candidate_href(&href) {
                        self.facts.hrefs.push(href);
                    } else {
                        tracing::trace!("Skipping href: {}", href);
                    }
                }
            }
            "base" => {
                if self.facts.base_href.is_none() {
                    self.facts.base_href = attr("href").filter(|href| is_usable_base_href(href));
                }
            }
            "input" => {
                let is_password = attr("type")
                    .map(|t| t.trim().eq_ignore_ascii_case("password"))
                    .unwrap_or(false);
                self.facts.has_login_form |= is_password;
            }
            "form" => {
                let mentions_login = ["action", "class"]
                    .into_iter()
                    .filter_map(|name| attr(name))
                    .any(|value| value.to_ascii_lowercase().contains("login"));
                self.facts.has_login_form |= mentions_login;
            }
            _ => {}
        }
    }

    fn finish(mut self) -> PageFacts {
        if self.title_closed {
            self.facts.title = decode_html_entities(&self.title_text).into_owned();
        }
        self.facts
    }
}

/// Scans an HTML document and returns its structural facts
///
/// The scan never fails: malformed markup is tolerated by the tokenizer, and
/// if it gives up part way through, whatever was collected up to that point
/// is returned.
///
/// # Example
///
/// ```
/// use pagescope::html::scan_html;
///
/// let facts = scan_html(r#"<title>Home</title><h1>A</h1><a href="/about">About</a>"#);
/// assert_eq!(facts.title, "Home");
/// assert_eq!(facts.headings.get("h1"), Some(&1));
/// assert_eq!(facts.hrefs, vec!["/about".to_string()]);
/// ```
pub fn scan_html(html: &str) -> PageFacts {
    let state = Rc::new(RefCell::new(ScanState::default()));

    {
        let on_element = Rc::clone(&state);
        let on_title_text = Rc::clone(&state);

        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![
                    element!("*", move |el| {
                        let tag = el.tag_name().to_ascii_lowercase();

                        if tag == "title" {
                            let first = {
                                let mut s = on_element.borrow_mut();
                                s.titles_seen += 1;
                                s.titles_seen == 1
                            };
                            if first {
                                if let Some(handlers) = el.end_tag_handlers() {
                                    let on_close = Rc::clone(&on_element);
                                    let handler: EndTagHandler<'static> = Box::new(move |_| {
                                        on_close.borrow_mut().title_closed = true;
                                        Ok(())
                                    });
                                    handlers.push(handler);
                                }
                            }
                            return Ok(());
                        }

                        // Attribute values arrive with character references still encoded.
                        on_element.borrow_mut().on_element(&tag, |name| {
                            el.get_attribute(name)
                                .map(|value| decode_html_entities(&value).into_owned())
                        });
                        Ok(())
                    }),
                    text!("title", move |chunk| {
                        let mut s = on_title_text.borrow_mut();
                        if s.titles_seen == 1 && !s.title_closed {
                            s.title_text.push_str(chunk.as_str());
                        }
                        Ok(())
                    }),
                ],
                strict: false,
                ..Settings::default()
            },
            |_: &[u8]| {},
        );

        let result = match rewriter.write(html.as_bytes()) {
            Ok(()) => rewriter.end(),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::debug!("HTML scan stopped early: {}", e);
        }
    }

    let state = std::mem::take(&mut *state.borrow_mut());
    state.finish()
}

/// Returns the page title, or an empty string if there is none
pub fn extract_title(html: &str) -> String {
    scan_html(html).title
}

/// Counts `h1`..`h6` start tags by lowercase tag name
pub fn count_headings(html: &str) -> BTreeMap<String, usize> {
    scan_html(html).headings
}

/// Detects a login form
///
/// True if any `<input>` has `type="password"`, or any `<form>` has an
/// `action` or `class` attribute containing "login" (case-insensitive).
pub fn detect_login_form(html: &str) -> bool {
    scan_html(html).has_login_form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{resolve_document_base, resolve_link};

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>Welcome!</title></head><body>Hello</body></html>";
        assert_eq!(extract_title(html), "Welcome!");
    }

    #[test]
    fn test_title_entities_are_decoded() {
        assert_eq!(extract_title("<title>Tom &amp; Jerry</title>"), "Tom & Jerry");
        assert_eq!(extract_title("<title>&lt;b&gt; &#169; &quot;x&quot;</title>"), "<b> © \"x\"");
    }

    #[test]
    fn test_title_keeps_raw_text() {
        let html = "<title>  Spaced  Title </title>";
        assert_eq!(extract_title(html), "  Spaced  Title ");
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<title>First</title><svg><title>Second</title></svg>";
        assert_eq!(extract_title(html), "First");
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(extract_title("<html><head></head><body></body></html>"), "");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(extract_title("<title></title><p>Body</p>"), "");
    }

    #[test]
    fn test_unclosed_title() {
        assert_eq!(extract_title("<html><head><title>Never closed"), "");
    }

    #[test]
    fn test_count_headings() {
        let html = r#"
            <html>
                <body>
                    <h1>Main</h1>
                    <h2>Sub1</h2>
                    <h2>Sub2</h2>
                    <h3>Detail</h3>
                </body>
            </html>"#;
        let headings = count_headings(html);
        assert_eq!(headings.get("h1"), Some(&1));
        assert_eq!(headings.get("h2"), Some(&2));
        assert_eq!(headings.get("h3"), Some(&1));
        assert_eq!(headings.get("h4"), None);
    }

    #[test]
    fn test_count_headings_exact_map() {
        let headings = count_headings("<h1>A</h1><h2>B</h2><h2>C</h2>");
        let expected: BTreeMap<String, usize> =
            [("h1".to_string(), 1), ("h2".to_string(), 2)].into_iter().collect();
        assert_eq!(headings, expected);
    }

    #[test]
    fn test_count_headings_case_insensitive() {
        let headings = count_headings("<H1>A</H1><h1>B</h1><H6>C</H6>");
        assert_eq!(headings.get("h1"), Some(&2));
        assert_eq!(headings.get("h6"), Some(&1));
    }

    #[test]
    fn test_non_heading_tags_are_ignored() {
        let headings = count_headings("<header>x</header><hr><h7>y</h7>");
        assert!(headings.is_empty());
    }

    #[test]
    fn test_login_form_with_password_input() {
        let html = r#"<form><input type="text" name="username"><input type="password" name="pass"></form>"#;
        assert!(detect_login_form(html));
    }

    #[test]
    fn test_login_password_outside_form() {
        assert!(detect_login_form(r#"<div><input type="password"></div>"#));
    }

    #[test]
    fn test_login_password_type_case_insensitive() {
        assert!(detect_login_form(r#"<form><input type="PassWord"></form>"#));
    }

    #[test]
    fn test_login_form_action() {
        assert!(detect_login_form(r#"<form action="/user/Login"><input type="text"></form>"#));
    }

    #[test]
    fn test_login_form_class() {
        assert!(detect_login_form(r#"<form class="site-LOGIN-box"></form>"#));
    }

    #[test]
    fn test_no_login_form() {
        assert!(!detect_login_form(r#"<form><input type="text"></form>"#));
        assert!(!detect_login_form(r#"<form action="/search"><input type="email"></form>"#));
    }

    #[test]
    fn test_hrefs_from_anchors_and_links() {
        let html = r#"
            <head>
                <link href="/style.css" />
                <link href="https://external.com/theme.css" />
            </head>
            <body>
                <a href="/about">About</a>
                <a href="https://external.com/page">External Page</a>
                <a href="mailto:someone@example.com">Email</a>
                <a href="tel:+15551234">Call</a>
                <a href="javascript:void(0)">JS</a>
                <a name="anchor-without-href">Nothing</a>
            </body>"#;
        let facts = scan_html(html);
        assert_eq!(
            facts.hrefs,
            vec![
                "/style.css".to_string(),
                "https://external.com/theme.css".to_string(),
                "/about".to_string(),
                "https://external.com/page".to_string(),
            ]
        );
    }

    #[test]
    fn test_href_entities_are_decoded() {
        let facts = scan_html(r#"<a href="/search?a=1&amp;b=2">s</a><link href="/x?p=&#49;">"#);
        assert_eq!(
            facts.hrefs,
            vec!["/search?a=1&b=2".to_string(), "/x?p=1".to_string()]
        );
    }

    #[test]
    fn test_encoded_login_attribute_is_decoded() {
        assert!(detect_login_form(r#"<form action="/log&#105;n"></form>"#));
        assert!(detect_login_form(r#"<input type="pass&#119;ord">"#));
    }

    #[test]
    fn test_unparsable_href_is_dropped() {
        let facts = scan_html(r#"<a href="http://[::1">Bad</a><a href="/ok">Ok</a>"#);
        assert_eq!(facts.hrefs, vec!["/ok".to_string()]);
    }

    #[test]
    fn test_first_base_href_wins() {
        let html = r#"<head><base target="_blank"><base href="https://a.example/"><base href="https://b.example/"></head>"#;
        let facts = scan_html(html);
        assert_eq!(facts.base_href.as_deref(), Some("https://a.example/"));
    }

    #[test]
    fn test_empty_base_href_does_not_block_later_base() {
        let html = r#"<base href=""><base href="  "><base href="https://a.example/">"#;
        let facts = scan_html(html);
        assert_eq!(facts.base_href.as_deref(), Some("https://a.example/"));

        let page = ::url::Url::parse("https://page.example/").unwrap();
        let base = resolve_document_base(facts.base_href.as_deref(), &page);
        let link = resolve_link("intro", base.as_ref(), &page).unwrap();
        assert_eq!(link.url.as_str(), "https://a.example/intro");
    }

    #[test]
    fn test_unparsable_base_href_is_skipped() {
        let facts = scan_html(r#"<base href="http://[::1"><base href="/docs/">"#);
        assert_eq!(facts.base_href.as_deref(), Some("/docs/"));
    }

    #[test]
    fn test_no_base_href() {
        assert_eq!(scan_html("<a href='/x'>x</a>").base_href, None);
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let html = "<html><body><h1>Open <a href='/a'>link <div></span></h2><<<>>> <h2";
        let facts = scan_html(html);
        assert_eq!(facts.headings.get("h1"), Some(&1));
        assert_eq!(facts.hrefs, vec!["/a".to_string()]);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let html = r#"<title>T</title><h2>x</h2><form action="login"></form><a href="/a">a</a>"#;
        assert_eq!(scan_html(html), scan_html(html));
    }
}
