//! Dismissible, time-limited status messages.
//!
//! Failures never hang a view: they surface as a status line the user can
//! dismiss, and which expires on its own after a fixed window. The consuming
//! view polls [`StatusMessage::expired`] from whatever timer it already
//! runs; the message itself holds no timer.

use std::time::{Duration, Instant};

/// How long a status message stays up before auto-dismissal.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One status line for the consuming view.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// Whether the view should offer a manual retry action.
    pub retryable: bool,
    posted_at: Instant,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
            retryable: false,
            posted_at: Instant::now(),
        }
    }

    /// Fetch failures are retryable by default.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
            retryable: true,
            posted_at: Instant::now(),
        }
    }

    pub fn posted_at(&self) -> Instant {
        self.posted_at
    }

    /// True once the auto-dismiss window has elapsed.
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.posted_at) >= DISMISS_AFTER
    }
}
