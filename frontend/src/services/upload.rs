//! MIDI upload to the piano backend.
//!
//! [`UploadFlow`] drives one attempt: it hands back the in-flight state
//! right away and a future resolving to the [`UploadOutcome`]. The HTTP
//! work sits behind [`UploadTransport`] so the flow runs without a browser.

use std::future::Future;

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{endpoint, BACKEND_URL, UPLOAD_FIELD, UPLOAD_PATH};
use crate::state::{UploadOutcome, UploadState};
use crate::types::{AppError, AppResult, RawReply, UploadReply};

/// Shown when a 2xx reply has no `message`.
const DEFAULT_DELIVERED_MESSAGE: &str = "upload accepted";

/// Sends one file to the backend and returns its raw reply.
///
/// `Err` means the request never completed.
#[allow(async_fn_in_trait)]
pub trait UploadTransport: Clone + 'static {
    type File: 'static;

    async fn post_file(&self, file: Self::File) -> AppResult<RawReply>;
}

/// Browser transport: multipart POST through `fetch`.
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl UploadTransport for BackendClient {
    type File = File;

    async fn post_file(&self, file: File) -> AppResult<RawReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

        let url = endpoint(&self.base_url, UPLOAD_PATH);
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        Ok(RawReply { status, body })
    }
}

/// Map a completed HTTP exchange to an outcome.
///
/// A body that is not JSON counts as a connection failure: nothing
/// trustworthy came back from the backend.
pub fn interpret_reply(raw: RawReply) -> UploadOutcome {
    let reply: UploadReply = match serde_json::from_str(&raw.body) {
        Ok(reply) => reply,
        Err(e) => {
            log::error!(
                "Unreadable reply from backend (HTTP {}): {}",
                raw.status,
                AppError::from(e)
            );
            return UploadOutcome::ConnectionFailed;
        }
    };

    if raw.is_ok() {
        UploadOutcome::Delivered {
            message: reply
                .message
                .unwrap_or_else(|| DEFAULT_DELIVERED_MESSAGE.to_string()),
            queue: reply.queue,
        }
    } else {
        UploadOutcome::Rejected {
            error: reply
                .error
                .unwrap_or_else(|| format!("HTTP {}", raw.status)),
        }
    }
}

/// One upload attempt per file selection.
#[derive(Clone, Debug, Default)]
pub struct UploadFlow<T> {
    transport: T,
}

impl<T: UploadTransport> UploadFlow<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Start an upload for the selected file, if any.
    ///
    /// Returns `None` when nothing was selected: the caller keeps its
    /// state. Otherwise returns the in-flight state, to publish before
    /// awaiting, and the request future.
    pub fn start(
        &self,
        file: Option<T::File>,
    ) -> Option<(UploadState, impl Future<Output = UploadOutcome> + 'static)> {
        let file = file?;
        let transport = self.transport.clone();

        let pending = async move {
            match transport.post_file(file).await {
                Ok(raw) => {
                    let outcome = interpret_reply(raw);
                    match &outcome {
                        UploadOutcome::Delivered { message, .. } => {
                            log::info!("Upload delivered: {}", message)
                        }
                        UploadOutcome::Rejected { error } => {
                            log::warn!("Upload rejected: {}", error)
                        }
                        UploadOutcome::ConnectionFailed => {}
                    }
                    outcome
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    UploadOutcome::ConnectionFailed
                }
            }
        };

        Some((UploadState::uploading(), pending))
    }
}
