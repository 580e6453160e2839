//! Turning an extracted href into an absolute URL.

/// Strips surrounding whitespace and quote characters.
pub fn normalize_href(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
}

/// `scheme://host[:port]` of `landing_url` (default ports omitted).
pub fn site_origin(landing_url: &str) -> Option<String> {
    let parsed = url::Url::parse(landing_url).ok()?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(origin.ascii_serialization())
}

/// Absolute URL for `href` on the site at `origin`.
///
/// - `https://…` / `http://…` is kept as is
/// - `//host/…` takes the origin's scheme
/// - `/path` is appended to the origin
/// - `path` is placed at the origin's root
pub fn resolve_link(href: &str, origin: &str) -> String {
    let href = normalize_href(href);
    let origin = origin.trim_end_matches('/');

    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        let scheme = origin.split("://").next().unwrap_or("https");
        return format!("{}://{}", scheme, rest);
    }
    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}
