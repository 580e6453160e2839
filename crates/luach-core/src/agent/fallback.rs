//! Built-in mobile browser user agents.

use super::AgentSource;
use rand::seq::SliceRandom;

/// Used when no live pool is configured or the pool can't be loaded.
pub const MOBILE_AGENTS: &[&str] = &[
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 14_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 10; SM-G981B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.162 Mobile Safari/537.36",
    "Mozilla/5.0 (Android 12; Mobile; rv:68.0) Gecko/68.0 Firefox/96.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/96.0.4664.53 Mobile/15E148 Safari/604.1",
];

/// Picks uniformly from a fixed list.
#[derive(Debug, Clone)]
pub struct StaticAgents {
    agents: Vec<String>,
}

impl StaticAgents {
    pub fn mobile() -> Self {
        Self::from_list(MOBILE_AGENTS.iter().map(|s| s.to_string()).collect())
    }

    /// Custom list; an empty list falls back to the mobile set.
    pub fn from_list(agents: Vec<String>) -> Self {
        if agents.is_empty() {
            return Self::mobile();
        }
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for StaticAgents {
    fn default() -> Self {
        Self::mobile()
    }
}

impl AgentSource for StaticAgents {
    fn user_agent(&self) -> String {
        self.agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| MOBILE_AGENTS[0].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_list_picks_known_agent() {
        let agents = StaticAgents::mobile();
        assert_eq!(agents.len(), MOBILE_AGENTS.len());
        for _ in 0..20 {
            let ua = agents.user_agent();
            assert!(MOBILE_AGENTS.contains(&ua.as_str()));
        }
    }

    #[test]
    fn single_entry_list_is_deterministic() {
        let agents = StaticAgents::from_list(vec!["test-agent/1.0".to_string()]);
        assert_eq!(agents.user_agent(), "test-agent/1.0");
        assert_eq!(agents.user_agent(), "test-agent/1.0");
    }

    #[test]
    fn empty_list_falls_back_to_mobile() {
        let agents = StaticAgents::from_list(Vec::new());
        assert!(!agents.is_empty());
        assert!(MOBILE_AGENTS.contains(&agents.user_agent().as_str()));
    }
}
