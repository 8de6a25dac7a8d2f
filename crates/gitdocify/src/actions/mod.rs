//! Actions module
//!
//! All actions of the application, tagged by the part of the screen or
//! domain they target:
//! - Generic actions (Navigate, TextInput, ViewContext) that the active view translates
//! - Global actions that affect the entire application
//! - Domain actions already targeted at one reducer

// Shared action types
pub mod context_action;
pub mod event;
pub mod global;
pub mod navigation;
pub mod text_input;

// Domain action types
pub mod alert;
pub mod commit_list;
pub mod docs;
pub mod live_update;
pub mod repo_input;
pub mod status_bar;

pub use alert::AlertAction;
pub use commit_list::CommitListAction;
pub use context_action::ContextAction;
pub use docs::DocsAction;
pub use event::Event;
pub use global::GlobalAction;
pub use live_update::LiveUpdateAction;
pub use navigation::NavigationAction;
pub use repo_input::RepoInputAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum
#[derive(Debug, Clone)]
pub enum Action {
    /// Facts that re-enter the middleware chain; never reach the reducers.
    /// Use `Action::event(Event::X)` to create.
    Event(Event),

    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action (ToggleSelect, ExpandAll, ...) - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    /// Repository input form
    RepoInput(RepoInputAction),
    /// Documentation fetch and export
    Docs(DocsAction),
    /// Commit list cursor and expansion
    CommitList(CommitListAction),
    /// Live update subscription
    LiveUpdate(LiveUpdateAction),
    /// Blocking notifications
    Alert(AlertAction),
    /// Status bar messages
    StatusBar(StatusBarAction),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Makes event creation visually distinct at the call site, signaling that
    /// the action only travels through the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
