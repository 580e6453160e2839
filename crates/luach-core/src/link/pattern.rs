//! Link discovery by scanning raw page text.

use regex::Regex;
use std::sync::OnceLock;

/// Any quoted href value ending in `/issue-<digits>.pdf`.
const ISSUE_HREF: &str = r#"href=["']([^"']*/issue-\d+\.pdf)["']"#;

fn issue_href() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISSUE_HREF).expect("issue href regex is valid"))
}

/// First href in `text` that points at an issue PDF.
pub fn pattern_link(text: &str) -> Option<String> {
    issue_href()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
