//! Blocking notification state

use std::collections::VecDeque;

/// Messages waiting to be acknowledged, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub queue: VecDeque<String>,
}

impl AlertState {
    /// The message on screen
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    /// Messages behind the current one
    pub fn pending(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
