//! Commit list actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Expand or collapse the commit or file under the cursor
    Toggle,
    ExpandAll,
    CollapseAll,
}
