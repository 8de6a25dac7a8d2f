//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `ToggleSelect`
//! (Enter, Space) toggles the item under the cursor in the commit list and
//! dismisses an alert.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Toggle state of focused item (Enter, Space)
    ToggleSelect,

    /// Expand everything (o)
    ExpandAll,

    /// Collapse everything (c)
    CollapseAll,
}
