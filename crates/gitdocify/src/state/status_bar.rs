//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum messages kept in the history
pub const MAX_STATUS_HISTORY: usize = 100;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// What triggered this message, e.g. "generate" or "export"
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// History of status messages, newest at the back
#[derive(Debug, Clone)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: MAX_STATUS_HISTORY,
        }
    }
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, dropping the oldest ones over the limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}
