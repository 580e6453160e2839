//! Outcome record of one fetch.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub success: bool,
    /// Absolute URL of the day's PDF, once resolved.
    pub resolved_url: Option<String>,
    /// Where the PDF is on disk.
    pub local_path: Option<PathBuf>,
    pub error_message: Option<String>,
    /// The file was already on disk; no PDF request was made.
    #[serde(default)]
    pub already_present: bool,
    /// Bytes written by this fetch (absent when nothing was downloaded).
    #[serde(default)]
    pub bytes_written: Option<u64>,
}

impl FetchResult {
    pub fn downloaded(url: String, path: PathBuf, bytes: u64) -> Self {
        Self {
            success: true,
            resolved_url: Some(url),
            local_path: Some(path),
            error_message: None,
            already_present: false,
            bytes_written: Some(bytes),
        }
    }

    pub fn already_present(url: String, path: PathBuf) -> Self {
        Self {
            success: true,
            resolved_url: Some(url),
            local_path: Some(path),
            error_message: None,
            already_present: true,
            bytes_written: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            resolved_url: None,
            local_path: None,
            error_message: Some(message.into()),
            already_present: false,
            bytes_written: None,
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_has_message_only() {
        let r = FetchResult::failed("no link found");
        assert!(!r.success);
        assert_eq!(r.error_message.as_deref(), Some("no link found"));
        assert!(r.resolved_url.is_none());
        assert!(r.local_path().is_none());
    }

    #[test]
    fn json_field_names() {
        let r = FetchResult::already_present(
            "https://dailyluach.com/files/issue-1.pdf".to_string(),
            PathBuf::from("downloads/issue-1.pdf"),
        );
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["resolved_url"], "https://dailyluach.com/files/issue-1.pdf");
        assert_eq!(v["local_path"], "downloads/issue-1.pdf");
        assert_eq!(v["already_present"], true);
        assert!(v["error_message"].is_null());
    }
}
