//! HTML version detection from DOCTYPE signatures

/// Known DOCTYPE signatures and the version each one identifies
///
/// Checked in order against the lowercased document; the first match wins.
pub const DOCTYPE_SIGNATURES: &[(&str, &str)] = &[
    ("<!DOCTYPE html>", "HTML 5"),
    ("-//W3C//DTD HTML 4.01//EN", "HTML 4.01 Strict"),
    ("-//W3C//DTD HTML 4.01 Transitional//EN", "HTML 4.01 Transitional"),
    ("-//W3C//DTD HTML 4.01 Frameset//EN", "HTML 4.01 Frameset"),
    ("-//W3C//DTD HTML 4.0//EN", "HTML 4.0 Strict"),
    ("-//W3C//DTD HTML 3.2//EN", "HTML 3.2"),
    ("-//IETF//DTD HTML 2.0//EN", "HTML 2.0"),
    ("-//IETF//DTD HTML 1.0//EN", "HTML 1.0"),
    ("-//W3C//DTD XHTML 1.0 Strict//EN", "XHTML 1.0 Strict"),
    ("-//W3C//DTD XHTML 1.0 Transitional//EN", "XHTML 1.0 Transitional"),
    ("-//W3C//DTD XHTML 1.0 Frameset//EN", "XHTML 1.0 Frameset"),
    ("-//W3C//DTD XHTML 1.1//EN", "XHTML 1.1"),
];

/// Version reported when no signature matches
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Classifies the HTML version of a document
///
/// Each signature is matched case-insensitively as a substring of the whole
/// document, so a DOCTYPE anywhere in the text is recognized.
///
/// # Examples
///
/// ```
/// use pagescope::html::detect_html_version;
///
/// assert_eq!(detect_html_version("<!doctype html><html></html>"), "HTML 5");
/// assert_eq!(detect_html_version("<html></html>"), "Unknown");
/// ```
pub fn detect_html_version(html: &str) -> &'static str {
    let lowered = html.to_ascii_lowercase();

    DOCTYPE_SIGNATURES
        .iter()
        .find(|(signature, _)| lowered.contains(&signature.to_ascii_lowercase()))
        .map(|(_, version)| *version)
        .unwrap_or(UNKNOWN_VERSION)
}
