//! Local file names for downloaded PDFs.
//!
//! The file is named after the last path segment of the resolved PDF URL,
//! cleaned for Linux filesystems.

mod clean;
mod segment;

pub use clean::clean_file_name;
pub use segment::last_path_segment;

/// Used when the URL path yields nothing usable.
pub const DEFAULT_FILENAME: &str = "daily.pdf";

/// File name under which the PDF at `url` is saved.
///
/// `https://dailyluach.com/files/issue-123.pdf` gives `issue-123.pdf`;
/// `https://dailyluach.com/` gives `daily.pdf`.
pub fn derive_filename(url: &str) -> String {
    last_path_segment(url)
        .map(|segment| clean_file_name(&segment))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_owned())
}
