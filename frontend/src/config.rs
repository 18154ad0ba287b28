//! Application configuration.
//!
//! The backend runs on the same machine as the browser, so the endpoint
//! and the user-facing strings are hardcoded here.

/// Backend base URL.
///
/// The piano backend that receives MIDI files and converts them.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Path of the multipart upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Path of the playback queue endpoint.
pub const QUEUE_PATH: &str = "/queue";

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Value of the picker's `accept` attribute.
pub const ACCEPTED_FILE_TYPES: &str = ".mid,.midi";

/// How often the queue panel refreshes itself (milliseconds).
pub const QUEUE_POLL_INTERVAL_MS: u32 = 5_000;

/// Status shown before the first upload.
pub const IDLE_STATUS: &str = "Idle";

/// Status shown while a request is in flight.
pub const UPLOADING_STATUS: &str = "Uploading & Converting...";

/// Status shown when the backend could not be reached.
pub const CONNECTION_FAILED_STATUS: &str = "Connection Failed: Is the Python backend running?";

/// Join [`BACKEND_URL`] (or another base) with an endpoint path.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(endpoint(BACKEND_URL, UPLOAD_PATH), "http://localhost:5000/upload");
        assert_eq!(endpoint("http://127.0.0.1:5000/", QUEUE_PATH), "http://127.0.0.1:5000/queue");
    }

    #[test]
    fn test_connection_failed_status_text() {
        assert_eq!(
            CONNECTION_FAILED_STATUS,
            "Connection Failed: Is the Python backend running?"
        );
    }
}
