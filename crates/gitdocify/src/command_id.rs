//! Command identifiers
//!
//! The semantic commands a key can be bound to. Serialized as snake_case
//! (e.g. `DocsExport` -> `"docs_export"`) so bindings can live in files.

use crate::actions::{
    Action, ContextAction, DocsAction, GlobalAction, NavigationAction, RepoInputAction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Repository ===
    /// Open the repository form
    RepositoryOpen,

    // === Documentation ===
    /// Generate again for the current repository
    DocsRefresh,
    /// Export the commit list to PDF
    DocsExport,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    // === Commit list ===
    /// Expand or collapse the item under the cursor
    CommitToggle,
    /// Expand every commit and file
    CommitExpandAll,
    /// Collapse everything
    CommitCollapseAll,

    // === General ===
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    pub fn to_action(self) -> Action {
        match self {
            Self::RepositoryOpen => Action::RepoInput(RepoInputAction::Open),

            Self::DocsRefresh => Action::Docs(DocsAction::Refresh),
            Self::DocsExport => Action::Docs(DocsAction::Export),

            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::CommitToggle => Action::ViewContext(ContextAction::ToggleSelect),
            Self::CommitExpandAll => Action::ViewContext(ContextAction::ExpandAll),
            Self::CommitCollapseAll => Action::ViewContext(ContextAction::CollapseAll),

            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short description for the footer
    pub fn description(&self) -> &'static str {
        match self {
            Self::RepositoryOpen => "repository",
            Self::DocsRefresh => "refresh",
            Self::DocsExport => "export PDF",
            Self::NavigateNext => "next",
            Self::NavigatePrevious => "previous",
            Self::NavigateToTop => "top",
            Self::NavigateToBottom => "bottom",
            Self::CommitToggle => "toggle",
            Self::CommitExpandAll => "expand all",
            Self::CommitCollapseAll => "collapse all",
            Self::GlobalQuit => "quit",
        }
    }
}
