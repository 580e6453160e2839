//! `luach serve` – run the HTTP API.

use anyhow::{Context, Result};
use luach_core::config::LuachConfig;
use luach_core::Fetcher;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::server::{self, AppState};

pub async fn run_serve(cfg: &LuachConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| cfg.server.host.clone());
    let port = port.unwrap_or_else(|| cfg.server_port());
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    for dir in [&cfg.download_dir, &cfg.direct_dir] {
        if !dir.exists() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create {}", dir.display()))?;
            tracing::info!("created directory {}", dir.display());
        }
    }

    let state = Arc::new(AppState {
        fetcher: Arc::new(Fetcher::new(cfg.fetch_settings())),
        download_dir: cfg.download_dir.clone(),
        direct_dir: cfg.direct_dir.clone(),
    });
    println!("Serving on http://{}", addr);
    server::start(addr, state).await
}
