//! Upload status state machine.
//!
//! ```text
//! Idle ──select──▶ Uploading ──▶ Success | Error | ConnectionFailed ──▶ Idle
//! ```
//!
//! The terminal phases are idle in the sense that matters: nothing is in
//! flight and the next selection starts over. They keep their own phase so
//! the status line can show the last result.
//!
//! The state is rebuilt whole at every transition: the terminal state
//! depends only on the outcome of the request that just finished.

use crate::config::{CONNECTION_FAILED_STATUS, IDLE_STATUS, UPLOADING_STATUS};

/// Where the widget is in the upload cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading,
    Success,
    Error,
    ConnectionFailed,
}

/// How an upload attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// The backend accepted the file.
    Delivered {
        message: String,
        queue: Option<Vec<String>>,
    },
    /// The backend answered with a non-ok status.
    Rejected { error: String },
    /// No usable answer came back.
    ConnectionFailed,
}

/// What the widget shows: one status line and the in-flight flag.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState {
    phase: UploadPhase,
    status: String,
}

impl Default for UploadState {
    fn default() -> Self {
        Self::idle()
    }
}

impl UploadState {
    pub fn idle() -> Self {
        Self {
            phase: UploadPhase::Idle,
            status: IDLE_STATUS.to_string(),
        }
    }

    pub fn uploading() -> Self {
        Self {
            phase: UploadPhase::Uploading,
            status: UPLOADING_STATUS.to_string(),
        }
    }

    /// Terminal state for a finished request. Never in flight.
    pub fn settled(outcome: &UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Delivered { message, .. } => Self {
                phase: UploadPhase::Success,
                status: format!("Success: {}", message),
            },
            UploadOutcome::Rejected { error } => Self {
                phase: UploadPhase::Error,
                status: format!("Error: {}", error),
            },
            UploadOutcome::ConnectionFailed => Self {
                phase: UploadPhase::ConnectionFailed,
                status: CONNECTION_FAILED_STATUS.to_string(),
            },
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    /// The file input accepts no selection while a request is in flight.
    pub fn input_disabled(&self) -> bool {
        self.is_uploading()
    }

    /// CSS classes for the status line.
    pub fn status_class(&self) -> &'static str {
        match self.phase {
            UploadPhase::Uploading => "status pulsing",
            UploadPhase::Success => "status status-success",
            UploadPhase::Error | UploadPhase::ConnectionFailed => "status status-error",
            UploadPhase::Idle => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> Vec<UploadState> {
        vec![
            UploadState::idle(),
            UploadState::uploading(),
            UploadState::settled(&UploadOutcome::Delivered {
                message: "ok".into(),
                queue: None,
            }),
            UploadState::settled(&UploadOutcome::Rejected {
                error: "bad".into(),
            }),
            UploadState::settled(&UploadOutcome::ConnectionFailed),
        ]
    }

    #[test]
    fn test_starts_idle() {
        let state = UploadState::default();
        assert_eq!(state.phase(), UploadPhase::Idle);
        assert_eq!(state.status(), "Idle");
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_uploading_status() {
        let state = UploadState::uploading();
        assert!(state.is_uploading());
        assert_eq!(state.status(), "Uploading & Converting...");
        assert_eq!(state.status_class(), "status pulsing");
    }

    #[test]
    fn test_settled_messages() {
        let ok = UploadState::settled(&UploadOutcome::Delivered {
            message: "Sent 3 notes".into(),
            queue: None,
        });
        assert_eq!(ok.status(), "Success: Sent 3 notes");
        assert_eq!(ok.phase(), UploadPhase::Success);

        let rejected = UploadState::settled(&UploadOutcome::Rejected {
            error: "Invalid MIDI".into(),
        });
        assert_eq!(rejected.status(), "Error: Invalid MIDI");
        assert_eq!(rejected.phase(), UploadPhase::Error);

        let down = UploadState::settled(&UploadOutcome::ConnectionFailed);
        assert_eq!(down.status(), CONNECTION_FAILED_STATUS);
        assert_eq!(down.phase(), UploadPhase::ConnectionFailed);
    }

    #[test]
    fn test_input_disabled_exactly_while_uploading() {
        for state in all_states() {
            assert_eq!(state.input_disabled(), state.is_uploading(), "{:?}", state);
        }
        let in_flight: Vec<_> = all_states().into_iter().filter(|s| s.is_uploading()).collect();
        assert_eq!(in_flight, vec![UploadState::uploading()]);
    }
}
