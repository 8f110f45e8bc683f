//! Transient status-line messages.

use std::time::{Duration, Instant};

/// Kind of status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain feedback such as "5 bytes written".
    Info,
    /// A failed operation, drawn on a red background.
    Error,
}

/// A message shown in the message bar until it expires.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Text shown in the message bar.
    pub text: String,
    /// Whether the message reports a failure.
    pub kind: MessageKind,
    /// When the message was set.
    pub created_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// An informational message stamped now.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    /// An error message stamped now.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    /// Returns true if the message is younger than `timeout` at `now`.
    pub fn is_visible_at(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < timeout
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let message = StatusMessage::info("saved");
        let timeout = Duration::from_secs(5);
        assert!(message.is_visible_at(message.created_at, timeout));
        assert!(message.is_visible_at(message.created_at + Duration::from_secs(4), timeout));
        assert!(!message.is_visible_at(message.created_at + timeout, timeout));
    }

    #[test]
    fn test_kinds() {
        assert!(StatusMessage::error("boom").is_error());
        assert!(!StatusMessage::info("ok").is_error());
    }
}
