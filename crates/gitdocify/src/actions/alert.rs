//! Blocking notification actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertAction {
    /// Show a message until the user dismisses it
    Show(String),
    /// Dismiss the oldest message
    Dismiss,
}

impl AlertAction {
    pub fn show(message: impl Into<String>) -> Self {
        Self::Show(message.into())
    }
}
