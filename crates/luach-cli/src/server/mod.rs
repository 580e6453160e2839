//! HTTP API for triggering downloads.
//!
//! Each request that downloads runs one full, blocking fetch on tokio's
//! blocking pool. Requests share only the [`Fetcher`] (which keeps no
//! per-fetch state) and the filesystem.

mod handlers;
mod params;
mod trail;

pub use params::DownloadParams;
pub use trail::LogTrail;

use axum::routing::get;
use axum::Router;
use luach_core::Fetcher;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared by all handlers.
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
    /// Target when a request names no `output_dir`.
    pub download_dir: PathBuf,
    /// Target for direct-response downloads.
    pub direct_dir: PathBuf,
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/download",
            get(handlers::download_get).post(handlers::download_post),
        )
        .route("/direct-download", get(handlers::direct_download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn start(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
