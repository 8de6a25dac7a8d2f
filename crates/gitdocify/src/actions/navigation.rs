//! Navigation actions - shared across views

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow)
    Next,
    /// Previous item (k, up arrow)
    Previous,
    /// First item (g)
    ToTop,
    /// Last item (G)
    ToBottom,
}
