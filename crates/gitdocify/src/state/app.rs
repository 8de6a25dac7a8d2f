//! Application State

use crate::keybindings::{default_keymap, Keymap};
use crate::views::{CommitListView, View};
use docify_config::AppConfig;
use docify_theme::Theme;

use super::{
    AlertState, CommitListState, LiveUpdateState, RepoInputState, SessionState, StatusBarState,
};

pub struct AppState {
    pub running: bool,
    /// Bottom view is the base, later views float on top and receive input
    pub view_stack: Vec<Box<dyn View>>,
    pub repo_input: RepoInputState,
    pub session: SessionState,
    pub commit_list: CommitListState,
    pub live_update: LiveUpdateState,
    pub alert: AlertState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub keymap: Keymap,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The top-most view, the one receiving input
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("repo_input", &self.repo_input)
            .field("session", &self.session)
            .field("commits", &self.commit_list.commits.len())
            .field("live_update", &self.live_update)
            .field("alert", &self.alert)
            .field("config", &self.config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            repo_input: self.repo_input.clone(),
            session: self.session.clone(),
            commit_list: self.commit_list.clone(),
            live_update: self.live_update.clone(),
            alert: self.alert.clone(),
            status_bar: self.status_bar.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            config: self.config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(CommitListView::new())],
            repo_input: RepoInputState::default(),
            session: SessionState::default(),
            commit_list: CommitListState::default(),
            live_update: LiveUpdateState::default(),
            alert: AlertState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            config: AppConfig::default(),
        }
    }
}
