//! The fetch routine: landing page → day's PDF link → file on disk.
//!
//! One call to [`Fetcher::fetch`] is one linear attempt with no retries. Every
//! failure, including a panic inside the attempt, comes back as a failed
//! [`FetchResult`]; callers decide whether to try again later.

mod error;
mod result;

pub use error::FetchError;
pub use result::FetchResult;

use crate::agent::{agent_source, AgentSource};
use crate::config::FetchSettings;
use crate::http::{HttpError, Session};
use crate::link::{find_link, resolve_link, site_origin, Strategy};
use crate::storage::PartFile;
use crate::url_model::derive_filename;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Fetches the daily PDF. Holds no per-fetch state, so one instance can
/// serve concurrent callers on different threads.
pub struct Fetcher {
    settings: FetchSettings,
    agents: Box<dyn AgentSource>,
}

impl Fetcher {
    /// Fetcher using the user-agent source selected by `settings`.
    pub fn new(settings: FetchSettings) -> Self {
        let agents = agent_source(&settings);
        Self::with_agents(settings, agents)
    }

    pub fn with_agents(settings: FetchSettings, agents: Box<dyn AgentSource>) -> Self {
        Self { settings, agents }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Fetch today's PDF into `target_dir`, creating the directory if needed.
    /// Skips the download when a file with the same name is already there.
    pub fn fetch(&self, target_dir: &Path) -> FetchResult {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| self.try_fetch(target_dir)));
        match attempt {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, network = e.is_network(), "fetch failed");
                FetchResult::failed(e.to_string())
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                tracing::error!("fetch panicked: {}", msg);
                FetchResult::failed(format!("unexpected error: {}", msg))
            }
        }
    }

    fn try_fetch(&self, target_dir: &Path) -> Result<FetchResult, FetchError> {
        std::fs::create_dir_all(target_dir).map_err(|source| FetchError::Directory {
            path: target_dir.to_path_buf(),
            source,
        })?;

        let landing = self.settings.landing_url.as_str();
        let origin = site_origin(landing).ok_or_else(|| FetchError::LandingUrl(landing.to_string()))?;

        let user_agent = self.agents.user_agent();
        let mut session = Session::new(
            &user_agent,
            self.settings.connect_timeout,
            self.settings.timeout,
        )
        .map_err(|source| HttpError::Transport {
            url: landing.to_string(),
            source,
        })?;

        tracing::info!(url = landing, "connecting to landing page");
        let waited = self.settings.delay.wait();
        tracing::debug!("waited {:.2}s before landing page request", waited.as_secs_f64());

        let link = {
            let page = session.get_text(landing)?;
            find_link(&page).ok_or(FetchError::NoLink)?
        };
        if link.strategy == Strategy::Pattern {
            tracing::info!("'Today' link not found in menu; used pattern scan");
        }

        let url = resolve_link(&link.href, &origin);
        tracing::info!(url = %url, strategy = %link.strategy, "PDF link found");

        let dest = target_dir.join(derive_filename(&url));
        if dest.exists() {
            tracing::info!(path = %dest.display(), "file already exists; skipping download");
            return Ok(FetchResult::already_present(url, dest));
        }

        let waited = self.settings.delay.wait();
        tracing::debug!("waited {:.2}s before PDF request", waited.as_secs_f64());

        tracing::info!(url = %url, "downloading");
        let mut part = PartFile::create(&dest).map_err(|source| FetchError::Storage {
            path: dest.clone(),
            source,
        })?;
        // Dropping `part` on error removes the temp file.
        session.get_into(&url, &mut part)?;

        match part.finalize() {
            Ok(bytes) => {
                tracing::info!(path = %dest.display(), bytes, "download completed");
                Ok(FetchResult::downloaded(url, dest, bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::info!(path = %dest.display(), "file appeared during download; keeping it");
                Ok(FetchResult::already_present(url, dest))
            }
            Err(source) => Err(FetchError::Storage { path: dest, source }),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}
