//! Text input actions - shared across views with text input capability

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Move focus to the next field (Tab)
    NextField,
    /// Move focus to the previous field (Shift+Tab)
    PreviousField,
    /// Escape pressed - typically closes the form
    Escape,
    /// Enter pressed - submit
    Confirm,
}
