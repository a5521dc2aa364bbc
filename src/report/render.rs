use super::PageAnalysisResult;

/// Renders a report as plain text
pub fn render_text(result: &PageAnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", result.message));
    out.push_str(&format!("HTML Version: {}\n", result.html_version));
    out.push_str(&format!("Page Title: {}\n", result.title));

    out.push_str("\nHeadings:\n");
    if result.headings.is_empty() {
        out.push_str("  (none)\n");
    }
    for (tag, count) in &result.headings {
        out.push_str(&format!("  {}: {}\n", tag, count));
    }

    out.push_str("\nLinks:\n");
    if result.links_available {
        out.push_str(&format!("  Internal Links: {}\n", result.internal_links));
        out.push_str(&format!("  External Links: {}\n", result.external_links));
        out.push_str(&format!("  Broken Links: {}\n", result.broken_links));
    } else {
        out.push_str("  (link analysis unavailable)\n");
    }

    out.push_str(&format!(
        "\nLogin Form Detection: {}\n",
        if result.has_login_form { "Yes" } else { "No" }
    ));

    out
}

/// Renders a report as pretty-printed JSON
pub fn render_json(result: &PageAnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample() -> PageAnalysisResult {
        let mut headings = BTreeMap::new();
        headings.insert("h1".to_string(), 1);
        headings.insert("h2".to_string(), 3);

        PageAnalysisResult {
            url: "http://example.com".to_string(),
            message: "Analyzing: http://example.com".to_string(),
            html_version: "HTML 5".to_string(),
            title: "Mock Title".to_string(),
            headings,
            internal_links: 2,
            external_links: 1,
            broken_links: 1,
            links_available: true,
            has_login_form: true,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert!(text.contains("Analyzing: http://example.com"));
        assert!(text.contains("HTML Version: HTML 5"));
        assert!(text.contains("Page Title: Mock Title"));
        assert!(text.contains("  h1: 1\n  h2: 3\n"));
        assert!(text.contains("Internal Links: 2"));
        assert!(text.contains("External Links: 1"));
        assert!(text.contains("Broken Links: 1"));
        assert!(text.contains("Login Form Detection: Yes"));
    }

    #[test]
    fn test_render_text_without_links() {
        let mut result = sample();
        result.links_available = false;
        result.headings.clear();
        let text = render_text(&result);
        assert!(text.contains("(link analysis unavailable)"));
        assert!(text.contains("(none)"));
        assert!(!text.contains("Internal Links"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Mock Title");
        assert_eq!(value["headings"]["h2"], 3);
        assert_eq!(value["internal_links"], 2);
        assert_eq!(value["has_login_form"], true);
    }
}
