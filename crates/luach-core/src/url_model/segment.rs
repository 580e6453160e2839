//! The filename-bearing segment of a resolved URL.

/// Last non-empty path segment of `url`, taken verbatim (no percent decoding).
///
/// Query and fragment never contribute. `None` for unparseable or relative
/// URLs, a bare origin, and the `.` / `..` segments.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .rev()
        .find(|s| !s.is_empty())
        .filter(|s| !matches!(*s, "." | ".."))
        .map(str::to_owned)
}
