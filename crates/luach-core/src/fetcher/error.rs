//! Failures of a single fetch attempt.

use crate::http::HttpError;
use std::io;
use std::path::PathBuf;

/// Everything that can stop a fetch. Converted to a failed
/// [`FetchResult`](super::FetchResult) at the fetcher boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Target directory could not be created.
    #[error("could not create directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Landing page URL has no usable origin for resolving relative links.
    #[error("invalid landing page URL: {0}")]
    LandingUrl(String),
    /// Network failure or non-2xx response on either request.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Neither link strategy matched.
    #[error("no link found")]
    NoLink,
    /// Temp file could not be created or finalized.
    #[error("could not write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FetchError {
    /// True for failures on the wire (connect, timeout, HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::Http(HttpError::Transport { .. }) | FetchError::Http(HttpError::Status { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_link_message() {
        assert_eq!(FetchError::NoLink.to_string(), "no link found");
    }

    #[test]
    fn status_message_names_url() {
        let e = FetchError::from(HttpError::Status {
            url: "https://dailyluach.com/".to_string(),
            status: 503,
        });
        assert_eq!(e.to_string(), "GET https://dailyluach.com/ returned HTTP 503");
        assert!(e.is_network());
    }

    #[test]
    fn directory_message_names_path() {
        let e = FetchError::Directory {
            path: PathBuf::from("/root/nope"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/root/nope"));
        assert!(!e.is_network());
    }
}
