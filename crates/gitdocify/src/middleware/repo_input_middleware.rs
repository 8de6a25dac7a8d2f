//! Repository Input Middleware
//!
//! Opens the form pre-filled with the current repository, turns a submitted
//! form into a generate request and keeps the recent repositories file in
//! sync with successful runs.

use crate::actions::{Action, DocsAction, Event, GlobalAction, RepoInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::RepoInputView;
use docify_config::{
    load_recent_repositories, save_recent_repositories, RecentRepositories, RecentRepository,
};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct RepoInputMiddleware {
    /// Recent repositories file; the platform config directory when None
    recent_path: Option<PathBuf>,
}

impl RepoInputMiddleware {
    pub fn new() -> Self {
        Self { recent_path: None }
    }

    #[cfg(test)]
    pub fn with_recent_path(path: impl Into<PathBuf>) -> Self {
        Self {
            recent_path: Some(path.into()),
        }
    }

    fn load_recent(&self) -> RecentRepositories {
        match &self.recent_path {
            Some(path) => RecentRepositories::load_from(path),
            None => load_recent_repositories(),
        }
    }

    fn save_recent(&self, recent: &RecentRepositories) {
        let result = match &self.recent_path {
            Some(path) => recent.save_to(path),
            None => save_recent_repositories(recent),
        };
        if let Err(e) = result {
            log::warn!("Failed to save recent repositories: {:#}", e);
        }
    }

    fn open_form(&self, state: &AppState, dispatcher: &Dispatcher) {
        let repo_url = state.session.repo_url.clone().unwrap_or_default();
        let max_commits = state
            .session
            .max_commits
            .unwrap_or_else(|| state.config.max_commits());

        dispatcher.dispatch(Action::RepoInput(RepoInputAction::Prefill {
            repo_url,
            max_commits,
        }));
        dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
            RepoInputView::new(),
        ))));
    }

    fn submit(&self, state: &AppState, dispatcher: &Dispatcher) {
        let form = &state.repo_input;
        let repo_url = form.url.trim().to_string();
        let max_commits = form.max_commits_or(state.config.max_commits());

        // An empty URL keeps the form open behind the alert
        if !repo_url.is_empty() {
            dispatcher.dispatch(Action::RepoInput(RepoInputAction::Close));
        }
        dispatcher.dispatch(Action::Docs(DocsAction::Generate {
            repo_url,
            max_commits,
        }));
    }
}

impl Middleware for RepoInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::Started) => {
                let recent = self.load_recent();
                dispatcher.dispatch(Action::RepoInput(RepoInputAction::RecentLoaded(recent)));
                true
            }
            Action::Event(Event::DocsGenerated {
                repo_url,
                max_commits,
            }) => {
                let mut recent = state.repo_input.recent.clone();
                recent.push(RecentRepository::new(repo_url.clone(), *max_commits));
                self.save_recent(&recent);
                dispatcher.dispatch(Action::RepoInput(RepoInputAction::RecentLoaded(recent)));
                true
            }
            Action::RepoInput(RepoInputAction::Open) => {
                self.open_form(state, dispatcher);
                false
            }
            Action::RepoInput(RepoInputAction::Submit) => {
                self.submit(state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::testing::{capture, drain};
    use crate::reducers::reduce;
    use crate::views::ViewId;
    use pretty_assertions::assert_eq;

    fn form_with(url: &str, max_commits: &str) -> AppState {
        let mut state = AppState::default();
        state.repo_input.url = url.to_string();
        state.repo_input.max_commits = max_commits.to_string();
        state
    }

    #[test]
    fn test_open_prefills_and_pushes_form() {
        let (dispatcher, rx) = capture();
        let mut state = AppState::default();
        state.session.repo_url = Some("https://github.com/o/r".to_string());
        state.session.max_commits = Some(7);

        assert!(!RepoInputMiddleware::new().handle(
            &Action::RepoInput(RepoInputAction::Open),
            &state,
            &dispatcher
        ));

        let state = drain(&rx).iter().fold(state, reduce);
        assert_eq!(state.repo_input.url, "https://github.com/o/r");
        assert_eq!(state.repo_input.max_commits, "7");
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::RepoInput)
        );
    }

    #[test]
    fn test_submit_closes_form_and_generates() {
        let (dispatcher, rx) = capture();
        let state = form_with("  https://github.com/o/r  ", "99");

        RepoInputMiddleware::new().handle(
            &Action::RepoInput(RepoInputAction::Submit),
            &state,
            &dispatcher,
        );

        let actions = drain(&rx);
        assert!(matches!(
            actions[0],
            Action::RepoInput(RepoInputAction::Close)
        ));
        match &actions[1] {
            Action::Docs(DocsAction::Generate {
                repo_url,
                max_commits,
            }) => {
                assert_eq!(repo_url, "https://github.com/o/r");
                assert_eq!(*max_commits, 50);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_submit_empty_url_keeps_form() {
        let (dispatcher, rx) = capture();
        let state = form_with("   ", "");

        RepoInputMiddleware::new().handle(
            &Action::RepoInput(RepoInputAction::Submit),
            &state,
            &dispatcher,
        );

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::Docs(DocsAction::Generate { max_commits: 20, .. })
        ));
    }

    #[test]
    fn test_recent_repositories_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent-repositories.toml");
        let mut middleware = RepoInputMiddleware::with_recent_path(&path);
        let (dispatcher, rx) = capture();
        let state = AppState::default();

        middleware.handle(
            &Action::event(Event::DocsGenerated {
                repo_url: "https://github.com/o/r".to_string(),
                max_commits: 12,
            }),
            &state,
            &dispatcher,
        );
        drain(&rx);

        middleware.handle(&Action::event(Event::Started), &state, &dispatcher);
        match &drain(&rx)[..] {
            [Action::RepoInput(RepoInputAction::RecentLoaded(recent))] => {
                assert_eq!(recent.len(), 1);
                let entry = recent.get(0).unwrap();
                assert_eq!(entry.url, "https://github.com/o/r");
                assert_eq!(entry.max_commits, 12);
            }
            other => panic!("unexpected actions {:?}", other),
        }
    }
}
