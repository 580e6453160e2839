//! Making a URL segment safe to use as a file name on Linux.

/// Longest file name ext4 and friends accept, in bytes.
const NAME_MAX: usize = 255;

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\') || c.is_control() || c.is_whitespace()
}

/// Replaces separators, whitespace and control characters with `_` (runs
/// collapse to one), strips leading and trailing `.`/`_`, and truncates to
/// `NAME_MAX` bytes on a char boundary. May return an empty string.
pub fn clean_file_name(segment: &str) -> String {
    let mut cleaned = String::with_capacity(segment.len());
    for c in segment.chars().map(|c| if is_unsafe(c) { '_' } else { c }) {
        if c == '_' && cleaned.ends_with('_') {
            continue;
        }
        cleaned.push(c);
    }

    let core = cleaned.trim_matches(|c| c == '.' || c == '_');
    let mut end = core.len().min(NAME_MAX);
    while !core.is_char_boundary(end) {
        end -= 1;
    }
    core[..end].to_owned()
}
