//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend reply payloads
//! - **Queue Types** - Playback queue snapshot
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// JSON body returned by `POST /upload`.
///
/// A 2xx reply carries `message` (and the pending queue); any other status
/// carries `error`. Both shapes are read through this one struct.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadReply {
    /// Confirmation text on success
    #[serde(default)]
    pub message: Option<String>,
    /// Failure text on rejection
    #[serde(default)]
    pub error: Option<String>,
    /// Songs waiting to be played, as backend paths
    #[serde(default)]
    pub queue: Option<Vec<String>>,
}

/// Unparsed HTTP reply as handed back by a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RawReply {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same meaning as `Response.ok` in the browser: status in 200..=299.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Queue Types
// =============================================================================

/// Playback queue as reported by `GET /queue`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueueSnapshot {
    /// Song currently playing on the piano
    #[serde(default)]
    pub current: Option<String>,
    /// Songs waiting, in play order
    #[serde(default)]
    pub queue: Vec<String>,
}

impl QueueSnapshot {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Take the pending list from an upload reply.
    ///
    /// The reply does not say what is playing, so `current` is left for the
    /// next `GET /queue` to settle.
    pub fn apply_delivered(&mut self, queue: Option<Vec<String>>) {
        if let Some(queue) = queue {
            self.queue = queue;
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request could not be built.
    #[error("Upload error: {0}")]
    Upload(String),

    /// The request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The reply body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_reply_success_shape() {
        let json = r#"{
            "message": "File uploaded and queued",
            "queue": ["uploads/fur_elise.csv", "uploads/canon.csv"]
        }"#;

        let reply: UploadReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.message.as_deref(), Some("File uploaded and queued"));
        assert_eq!(reply.error, None);
        assert_eq!(reply.queue.unwrap().len(), 2);
    }

    #[test]
    fn test_upload_reply_error_shape() {
        let reply: UploadReply = serde_json::from_str(r#"{"error": "No selected file"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("No selected file"));
        assert_eq!(reply.message, None);
        assert_eq!(reply.queue, None);
    }

    #[test]
    fn test_queue_snapshot_with_nothing_playing() {
        let snapshot: QueueSnapshot =
            serde_json::from_str(r#"{"current": null, "queue": []}"#).unwrap();
        assert!(snapshot.is_empty());

        let snapshot: QueueSnapshot = serde_json::from_str(
            r#"{"current": "uploads/a.csv", "queue": ["uploads/b.csv"]}"#,
        )
        .unwrap();
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.current.as_deref(), Some("uploads/a.csv"));
    }

    #[test]
    fn test_apply_delivered_replaces_pending_list() {
        let mut snapshot = QueueSnapshot {
            current: Some("uploads/a.csv".into()),
            queue: vec!["uploads/b.csv".into()],
        };

        snapshot.apply_delivered(Some(vec!["uploads/b.csv".into(), "uploads/c.csv".into()]));
        assert_eq!(snapshot.current.as_deref(), Some("uploads/a.csv"));
        assert_eq!(snapshot.queue, vec!["uploads/b.csv", "uploads/c.csv"]);

        snapshot.apply_delivered(None);
        assert_eq!(snapshot.queue, vec!["uploads/b.csv", "uploads/c.csv"]);
    }

    #[test]
    fn test_raw_reply_ok_range() {
        assert!(RawReply::new(200, "").is_ok());
        assert!(RawReply::new(204, "").is_ok());
        assert!(!RawReply::new(199, "").is_ok());
        assert!(!RawReply::new(400, "").is_ok());
        assert!(!RawReply::new(500, "").is_ok());
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: AppError = serde_json::from_str::<UploadReply>("<html>").unwrap_err().into();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
