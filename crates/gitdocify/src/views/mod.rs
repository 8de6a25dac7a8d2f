use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod alert_view;
pub mod commit_list_view;
pub mod repo_input_view;
pub mod status_bar;

pub use alert_view::AlertView;
pub use commit_list_view::CommitListView;
pub use repo_input_view::RepoInputView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    CommitList,
    RepoInput,
    Alert,
}

/// Interface of everything on the view stack
///
/// Must stay object-safe (views travel inside actions as `Box<dyn View>`)
/// and `Send + Sync` (actions and shared state cross the worker thread).
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// What kind of input this view takes (for keyboard routing)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's action
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's action
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, Space, o, c) to this view's action
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command may be dispatched while this view is active
    fn accepts_action(&self, action: &Action) -> bool;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the view stack bottom-up, then the status bar
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    use ratatui::layout::{Constraint, Layout};

    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    for view in &state.view_stack {
        view.render(state, main, f);
    }

    let vm = crate::view_models::StatusBarViewModel::from_state(state);
    f.render_widget(status_bar::StatusBarWidget(&vm), status);
}

/// Centered popup area of `width` x `height`, shrunk to fit `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
