//! Request parameters for `/download`.

use serde::Deserialize;
use std::path::PathBuf;

/// `direct` arrives as `"true"` in query strings and forms, and as a
/// boolean (or string) in JSON bodies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DirectFlag {
    Bool(bool),
    Text(String),
}

impl DirectFlag {
    pub fn is_set(&self) -> bool {
        match self {
            DirectFlag::Bool(b) => *b,
            DirectFlag::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub direct: Option<DirectFlag>,
}

impl DownloadParams {
    /// Fields present in `body` win over `self` (the query string).
    pub fn overridden_by(self, body: DownloadParams) -> DownloadParams {
        DownloadParams {
            output_dir: body.output_dir.or(self.output_dir),
            direct: body.direct.or(self.direct),
        }
    }

    pub fn direct(&self) -> bool {
        self.direct.as_ref().is_some_and(DirectFlag::is_set)
    }

    /// Requested target directory; blank counts as absent.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}
