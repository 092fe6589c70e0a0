//! Side effects emitted by command handling.
//!
//! The store never touches the toast layer, the clipboard, or the browser
//! itself. Handlers return these values and the embedding shell interprets
//! them.

use serde::{Deserialize, Serialize};

/// How long a success notice stays on screen.
pub const SUCCESS_DURATION_MS: u64 = 2000;
/// How long an error notice stays on screen.
pub const ERROR_DURATION_MS: u64 = 4000;

/// Urgency of a notice, mapped to toast styling by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A transient on-screen notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            duration_ms: SUCCESS_DURATION_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            duration_ms: ERROR_DURATION_MS,
        }
    }

    /// Same notice, shown for a non-default time.
    pub fn lasting(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// An instruction to the embedding shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Show a transient notification.
    Notify(Notice),
    /// Put text on the system clipboard.
    CopyToClipboard { text: String },
    /// Open an external link.
    OpenUrl { url: String },
}
