use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::delay::DelayRange;

/// Landing page of the daily luach site.
pub const DEFAULT_LANDING_URL: &str = "https://dailyluach.com/";

/// Upper bound for either randomized sleep.
pub const MAX_DELAY_SECS: f64 = 3600.0;
/// Upper bound for the connect and request timeouts.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Bounds (seconds) for the randomized sleeps before each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            min_secs: 2.0,
            max_secs: 5.0,
        }
    }
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, body included.
    pub timeout_secs: u64,
    /// Optional URL of a JSON list of user agents (live pool). When unset
    /// or unreachable, the built-in mobile list is used.
    #[serde(default)]
    pub user_agent_source: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 300,
            user_agent_source: None,
        }
    }
}

/// Bind address for `luach serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Global configuration loaded from `~/.config/luach/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuachConfig {
    /// Page scanned for the day's PDF link. Relative links resolve against its origin.
    pub landing_url: String,
    /// Default target directory for downloads.
    pub download_dir: PathBuf,
    /// Staging directory for files streamed straight back to HTTP clients.
    pub direct_dir: PathBuf,
    #[serde(default)]
    pub delay: DelayConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for LuachConfig {
    fn default() -> Self {
        Self {
            landing_url: DEFAULT_LANDING_URL.to_string(),
            download_dir: PathBuf::from("downloads"),
            direct_dir: PathBuf::from("temp"),
            delay: DelayConfig::default(),
            http: HttpConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Everything one fetch needs, passed explicitly to the fetcher.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub landing_url: String,
    pub delay: DelayRange,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent_source: Option<String>,
}

impl FetchSettings {
    /// Settings for `landing_url` with no sleeps and short timeouts. Used by tests and tooling.
    pub fn immediate(landing_url: impl Into<String>) -> Self {
        Self {
            landing_url: landing_url.into(),
            delay: DelayRange::none(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
            user_agent_source: None,
        }
    }
}

impl LuachConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            landing_url: self.landing_url.clone(),
            delay: DelayRange::from_secs(self.delay.min_secs, self.delay.max_secs),
            connect_timeout: Duration::from_secs(self.http.connect_timeout_secs),
            timeout: Duration::from_secs(self.http.timeout_secs),
            user_agent_source: self.http.user_agent_source.clone(),
        }
    }

    /// Rejects values the fetcher can't use: negative, NaN or oversized
    /// delays, zero or oversized timeouts.
    pub fn validate(&self) -> Result<()> {
        for (key, v) in [
            ("delay.min_secs", self.delay.min_secs),
            ("delay.max_secs", self.delay.max_secs),
        ] {
            anyhow::ensure!(
                (0.0..=MAX_DELAY_SECS).contains(&v),
                "{} must be between 0 and {} (got {})",
                key,
                MAX_DELAY_SECS,
                v
            );
        }
        for (key, v) in [
            ("http.connect_timeout_secs", self.http.connect_timeout_secs),
            ("http.timeout_secs", self.http.timeout_secs),
        ] {
            anyhow::ensure!(
                (1..=MAX_TIMEOUT_SECS).contains(&v),
                "{} must be between 1 and {} (got {})",
                key,
                MAX_TIMEOUT_SECS,
                v
            );
        }
        Ok(())
    }

    /// Port to listen on: `PORT` from the environment wins over the config file.
    pub fn server_port(&self) -> u16 {
        port_override(std::env::var("PORT").ok().as_deref()).unwrap_or(self.server.port)
    }
}

fn port_override(value: Option<&str>) -> Option<u16> {
    value.and_then(|v| v.trim().parse::<u16>().ok())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("luach")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LuachConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LuachConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<LuachConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LuachConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
