//! `luach fetch` – download today's PDF once.

use anyhow::{Context, Result};
use luach_core::config::LuachConfig;
use luach_core::{FetchResult, Fetcher};
use std::path::PathBuf;

pub async fn run_fetch(cfg: &LuachConfig, output_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let target = output_dir.unwrap_or_else(|| cfg.download_dir.clone());
    tracing::info!(dir = %target.display(), "starting daily PDF download");

    let fetcher = Fetcher::new(cfg.fetch_settings());
    let dir = target.clone();
    let result = tokio::task::spawn_blocking(move || fetcher.fetch(&dir))
        .await
        .context("fetch task failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", summary(&result));
    }

    if !result.success {
        anyhow::bail!(
            "download failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
    }
    tracing::info!("process completed successfully");
    Ok(())
}

/// One line for humans describing the outcome.
fn summary(result: &FetchResult) -> String {
    let path = result
        .local_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    match (result.success, result.already_present) {
        (true, true) => format!("Already downloaded: {}", path),
        (true, false) => format!("Downloaded: {}", path),
        (false, _) => format!(
            "Download failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}
