//! Browser-like request headers.

/// Headers sent with every request besides User-Agent, which curl sets itself.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Cache-Control", "max-age=0"),
    ("TE", "Trailers"),
];

/// Header lines in curl's `Name: value` form.
pub fn header_lines() -> Vec<String> {
    BROWSER_HEADERS
        .iter()
        .map(|(k, v)| format!("{}: {}", k.trim(), v.trim()))
        .collect()
}
