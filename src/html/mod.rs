//! HTML extraction module
//!
//! This module turns raw HTML text into the structural facts used by the
//! analyzer:
//! - Title text and heading counts
//! - `<base href>` and candidate hyperlinks
//! - Login-form indicators
//! - HTML version from DOCTYPE signatures

mod doctype;
mod scanner;

pub use doctype::{detect_html_version, DOCTYPE_SIGNATURES, UNKNOWN_VERSION};
pub use scanner::{count_headings, detect_login_form, extract_title, scan_html, PageFacts};
