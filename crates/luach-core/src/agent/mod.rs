//! User-agent sources for outbound requests.
//!
//! The fetcher asks an [`AgentSource`] for one User-Agent per fetch. The
//! built-in [`StaticAgents`] list is always available; [`LiveAgents`] pulls
//! a fresher pool from a URL and falls back to the static list when it can't.

mod fallback;
mod live;

pub use fallback::{StaticAgents, MOBILE_AGENTS};
pub use live::{parse_agent_list, LiveAgents};

use crate::config::FetchSettings;

/// Supplies a User-Agent string for the next fetch.
pub trait AgentSource: Send + Sync {
    fn user_agent(&self) -> String;
}

/// Live pool when a source URL is configured, otherwise the built-in mobile list.
pub fn agent_source(settings: &FetchSettings) -> Box<dyn AgentSource> {
    match settings.user_agent_source.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            Box::new(LiveAgents::new(url.trim(), settings.connect_timeout))
        }
        _ => Box::new(StaticAgents::mobile()),
    }
}
