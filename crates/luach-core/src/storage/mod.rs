//! Disk I/O and file lifecycle.
//!
//! The PDF body is streamed into a uniquely named `.part` file next to its
//! destination and moved into place on success. A part file that is never
//! finalized is removed, so an interrupted download never shows up under
//! the final name, and two downloads of the same file never share one.

mod writer;

pub use writer::PartFile;

/// Suffix of in-progress download files.
pub const TEMP_SUFFIX: &str = ".part";

/// True for a leftover or in-progress download file name.
pub fn is_part_file(path: &std::path::Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.') && n.ends_with(TEMP_SUFFIX))
}
