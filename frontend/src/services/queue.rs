//! Playback queue reported by the backend.

use gloo_net::http::Request;

use crate::config::{endpoint, QUEUE_PATH};
use crate::types::{AppError, AppResult, QueueSnapshot};

/// Fetch the current song and the pending queue.
pub async fn fetch_queue(backend_url: &str) -> AppResult<QueueSnapshot> {
    let url = endpoint(backend_url, QUEUE_PATH);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "Server error ({})",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    Ok(serde_json::from_str(&body)?)
}

/// Snapshot to show after a refresh. A failed fetch keeps `prev`.
pub fn next_snapshot(prev: QueueSnapshot, fetched: AppResult<QueueSnapshot>) -> QueueSnapshot {
    match fetched {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Could not refresh queue: {}", e);
            prev
        }
    }
}

/// Queue entries are backend paths; show only the file name.
pub fn entry_label(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
