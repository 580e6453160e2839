//! Endpoint handlers.

use axum::body::Body;
use axum::extract::{FromRequest, Query, Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use chrono::Local;
use luach_core::FetchResult;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use super::{AppState, DownloadParams, LogTrail};

#[derive(Debug, Serialize)]
pub(super) struct DownloadResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    logs: Vec<String>,
    timestamp: String,
}

impl DownloadResponse {
    fn new(success: bool, message: &'static str, trail: LogTrail) -> Self {
        Self {
            success,
            message,
            output_directory: None,
            resolved_url: None,
            local_path: None,
            error: None,
            logs: trail.into_lines(),
            timestamp: Local::now().to_rfc3339(),
        }
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Local::now().to_rfc3339(),
        "message": "Daily PDF downloader API is running",
    }))
}

pub(super) async fn download_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> Response {
    run_download(&state, params).await
}

/// POST accepts a JSON or form body; its fields override the query string.
pub(super) async fn download_post(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DownloadParams>,
    request: Request,
) -> Response {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let body = if content_type.starts_with("application/json") {
        match Json::<DownloadParams>::from_request(request, &()).await {
            Ok(Json(p)) => p,
            Err(rejection) => return rejection.into_response(),
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        match Form::<DownloadParams>::from_request(request, &()).await {
            Ok(Form(p)) => p,
            Err(rejection) => return rejection.into_response(),
        }
    } else {
        DownloadParams::default()
    };

    run_download(&state, query.overridden_by(body)).await
}

pub(super) async fn direct_download(State(state): State<Arc<AppState>>) -> Response {
    let mut trail = LogTrail::default();
    trail.push("Starting direct PDF download to client");
    direct_response(&state, trail).await
}

async fn run_download(state: &AppState, params: DownloadParams) -> Response {
    let mut trail = LogTrail::default();

    if params.direct() {
        return direct_response(state, trail).await;
    }

    let output_dir = params
        .output_dir()
        .unwrap_or_else(|| state.download_dir.clone());
    let output_directory = Some(output_dir.display().to_string());

    if !output_dir.exists() {
        if let Err(e) = tokio::fs::create_dir_all(&output_dir).await {
            trail.push(format!("Error: {}", e));
            let mut resp =
                DownloadResponse::new(false, "Error occurred during download", trail);
            resp.output_directory = output_directory;
            resp.error = Some(format!("could not create {}: {}", output_dir.display(), e));
            return resp.into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
        trail.push(format!("Created output directory: {}", output_dir.display()));
    }

    trail.push(format!("Downloading PDF to: {}", output_dir.display()));
    let result = fetch_blocking(state, output_dir).await;

    let (status, message) = if result.success {
        trail.push("Download completed successfully");
        (StatusCode::OK, "PDF downloaded successfully")
    } else {
        trail.push("Download failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to download PDF")
    };

    let mut resp = DownloadResponse::new(result.success, message, trail);
    resp.output_directory = output_directory;
    resp.resolved_url = result.resolved_url;
    resp.local_path = result.local_path.map(|p| p.display().to_string());
    resp.error = result.error_message;
    resp.into_response_with(status)
}

/// Fetch into the staging directory and stream the PDF back.
async fn direct_response(state: &AppState, mut trail: LogTrail) -> Response {
    let result = fetch_blocking(state, state.direct_dir.clone()).await;

    let path = match (result.success, result.local_path) {
        (true, Some(path)) => path,
        _ => {
            trail.push("Download failed, cannot send file to client");
            let mut resp = DownloadResponse::new(
                false,
                "Failed to download PDF for direct download",
                trail,
            );
            resp.resolved_url = result.resolved_url;
            resp.error = result.error_message;
            return resp.into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    trail.push(format!("Sending file directly to client: {}", path.display()));
    match file_response(&path).await {
        Ok(resp) => resp,
        Err(e) => {
            trail.push(format!("Error: {}", e));
            let mut resp =
                DownloadResponse::new(false, "Error occurred during direct download", trail);
            resp.local_path = Some(path.display().to_string());
            resp.error = Some(e.to_string());
            resp.into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Streams `path` as a PDF attachment.
pub(super) async fn file_response(path: &Path) -> std::io::Result<Response> {
    let file = tokio::fs::File::open(path).await?;
    let len = file.metadata().await?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().replace('"', ""))
        .unwrap_or_else(|| "daily.pdf".to_string());

    let mut resp = Response::new(Body::from_stream(ReaderStream::new(file)));
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    if let Ok(v) = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", name)) {
        headers.insert(header::CONTENT_DISPOSITION, v);
    }
    Ok(resp)
}

/// Runs one fetch on the blocking pool.
async fn fetch_blocking(state: &AppState, dir: PathBuf) -> FetchResult {
    let fetcher = Arc::clone(&state.fetcher);
    match tokio::task::spawn_blocking(move || fetcher.fetch(&dir)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("fetch task failed: {}", e);
            FetchResult::failed(format!("fetch task failed: {}", e))
        }
    }
}
