//! User-agent pool loaded from a remote JSON list.

use super::{AgentSource, StaticAgents};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

/// One entry of the remote list: a bare string or an object carrying the agent.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AgentEntry {
    Plain(String),
    Record {
        #[serde(alias = "userAgent", alias = "user_agent")]
        ua: String,
    },
}

/// Parse a JSON array of user agents. Blank entries are dropped.
pub fn parse_agent_list(body: &[u8]) -> Result<Vec<String>> {
    let entries: Vec<AgentEntry> =
        serde_json::from_slice(body).context("user agent list is not a JSON array")?;
    Ok(entries
        .into_iter()
        .map(|e| match e {
            AgentEntry::Plain(s) => s,
            AgentEntry::Record { ua } => ua,
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Pool fetched from `url` on first use and kept for the life of the process.
pub struct LiveAgents {
    url: String,
    timeout: Duration,
    pool: OnceLock<StaticAgents>,
}

impl LiveAgents {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            pool: OnceLock::new(),
        }
    }

    fn pool(&self) -> &StaticAgents {
        self.pool.get_or_init(|| match load(&self.url, self.timeout) {
            Ok(agents) if !agents.is_empty() => {
                tracing::debug!(url = %self.url, count = agents.len(), "loaded user agent pool");
                StaticAgents::from_list(agents)
            }
            Ok(_) => {
                tracing::warn!(url = %self.url, "user agent pool is empty; using built-in list");
                StaticAgents::mobile()
            }
            Err(e) => {
                tracing::warn!(url = %self.url, "user agent pool unavailable: {:#}; using built-in list", e);
                StaticAgents::mobile()
            }
        })
    }
}

impl AgentSource for LiveAgents {
    fn user_agent(&self) -> String {
        self.pool().user_agent()
    }
}

fn load(url: &str, timeout: Duration) -> Result<Vec<String>> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout.saturating_mul(2))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("user agent pool GET failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    parse_agent_list(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::MOBILE_AGENTS;

    #[test]
    fn parse_plain_strings() {
        let body = br#"["Agent/1", "  Agent/2  ", ""]"#;
        let agents = parse_agent_list(body).unwrap();
        assert_eq!(agents, vec!["Agent/1".to_string(), "Agent/2".to_string()]);
    }

    #[test]
    fn parse_records() {
        let body = br#"[{"ua": "A/1"}, {"userAgent": "B/2", "pct": 3.2}, "C/3"]"#;
        let agents = parse_agent_list(body).unwrap();
        assert_eq!(agents, vec!["A/1", "B/2", "C/3"]);
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(parse_agent_list(br#"{"ua": "A/1"}"#).is_err());
        assert!(parse_agent_list(b"not json").is_err());
    }

    #[test]
    fn unreachable_pool_falls_back_to_builtin_list() {
        // Bind then drop to get a port with nothing listening.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let live = LiveAgents::new(
            format!("http://127.0.0.1:{}/agents.json", port),
            Duration::from_secs(2),
        );
        let ua = live.user_agent();
        assert!(MOBILE_AGENTS.contains(&ua.as_str()));
    }
}
