//! Documentation Middleware
//!
//! Runs generate requests through the [`FetchOrchestrator`] and exports the
//! commit list to PDF. Both run on the shared tokio runtime and report back
//! through the dispatcher:
//! - `Generate` → `Loaded` + `Event::DocsGenerated`, or `Failed` + alert
//! - `Export` → `Exported`, or `ExportFailed` + alert
//!
//! A generate request for a repository other than the one with live
//! updates also (re)subscribes to live updates.

use crate::actions::{Action, AlertAction, DocsAction, Event, LiveUpdateAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::orchestrator::{validate_repo_url, FetchOrchestrator, GenerateError};
use crate::state::AppState;
use docify_client::ProjectMeta;
use docify_pdf::{export_commits, ExportError};
use std::sync::Arc;
use tokio::runtime::Handle;

const SOURCE: &str = "Docs";

pub struct DocsMiddleware {
    runtime: Handle,
    orchestrator: Arc<FetchOrchestrator>,
}

impl DocsMiddleware {
    pub fn new(runtime: Handle, orchestrator: Arc<FetchOrchestrator>) -> Self {
        Self {
            runtime,
            orchestrator,
        }
    }

    /// Returns false when the request was rejected before any network call
    fn generate(
        &self,
        repo_url: &str,
        max_commits: u32,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        let repo_url = match validate_repo_url(repo_url) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("Rejected generate request: {}", e);
                dispatcher.dispatch(Action::Alert(AlertAction::show(e.to_string())));
                return false;
            }
        };

        if state.live_update.repo_url.as_deref() != Some(repo_url.as_str())
            || state.live_update.active.is_none()
        {
            dispatcher.dispatch(Action::LiveUpdate(LiveUpdateAction::Subscribe {
                repo_url: repo_url.clone(),
            }));
        }

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Generating documentation for {}", repo_url),
            SOURCE,
        )));

        let orchestrator = Arc::clone(&self.orchestrator);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match orchestrator.generate(&repo_url, max_commits).await {
                Ok(docs) => {
                    let count = docs.commits.len();
                    let status = if count == 0 {
                        StatusBarAction::info(format!("No commits found in {}", docs.repo_url), SOURCE)
                    } else {
                        StatusBarAction::success(format!("Documented {} commits", count), SOURCE)
                    };
                    dispatcher.dispatch(Action::Docs(DocsAction::Loaded {
                        repo_url: docs.repo_url.clone(),
                        project: docs.project,
                        commits: docs.commits,
                    }));
                    dispatcher.dispatch(Action::event(Event::DocsGenerated {
                        repo_url: docs.repo_url,
                        max_commits,
                    }));
                    dispatcher.dispatch(Action::StatusBar(status));
                }
                Err(e) => {
                    log::error!("Generating docs for {} failed: {}", repo_url, e.detail());
                    dispatcher.dispatch(Action::Docs(DocsAction::Failed {
                        repo_url,
                        error: e.detail(),
                    }));
                    dispatcher.dispatch(Action::Alert(AlertAction::show(e.to_string())));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        e.detail(),
                        SOURCE,
                    )));
                }
            }
        });
        true
    }

    /// Generate again with the repository and limit on screen
    fn refresh(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(repo_url) = state.session.repo_url.clone() else {
            dispatcher.dispatch(Action::Alert(AlertAction::show(
                GenerateError::EmptyRepoUrl.to_string(),
            )));
            return;
        };
        let max_commits = state
            .session
            .max_commits
            .unwrap_or_else(|| state.config.max_commits());
        dispatcher.dispatch(Action::Docs(DocsAction::Generate {
            repo_url,
            max_commits,
        }));
    }

    /// Returns false when there is nothing to export or an export is running
    fn export(&self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if state.session.exporting {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "An export is already running",
                SOURCE,
            )));
            return false;
        }

        let list = &state.commit_list;
        if list.is_empty() {
            dispatcher.dispatch(Action::Alert(AlertAction::show(
                ExportError::EmptyCommitList.to_string(),
            )));
            return false;
        }

        let project = list
            .project
            .clone()
            .unwrap_or_else(|| ProjectMeta::without_description(""));
        let commits = list.commits.clone();
        let path = state.config.pdf_path();
        let dispatcher = dispatcher.clone();

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Exporting {} commits", commits.len()),
            SOURCE,
        )));

        self.runtime.spawn_blocking(move || {
            match export_commits(&project, &commits, &path) {
                Ok(path) => {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("PDF written to {}", path.display()),
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::Docs(DocsAction::Exported(path)));
                }
                Err(e) => {
                    log::error!("PDF export to {} failed: {}", path.display(), e);
                    dispatcher.dispatch(Action::Docs(DocsAction::ExportFailed(e.to_string())));
                    dispatcher.dispatch(Action::Alert(AlertAction::show(e.to_string())));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        e.to_string(),
                        SOURCE,
                    )));
                }
            }
        });
        true
    }
}

impl Middleware for DocsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Docs(DocsAction::Generate {
                repo_url,
                max_commits,
            }) => {
                // Forward the trimmed URL so the reducer tracks the same key
                if repo_url.trim() != repo_url {
                    dispatcher.dispatch(Action::Docs(DocsAction::Generate {
                        repo_url: repo_url.trim().to_string(),
                        max_commits: *max_commits,
                    }));
                    return false;
                }
                self.generate(repo_url, *max_commits, state, dispatcher)
            }
            Action::Docs(DocsAction::Refresh) => {
                self.refresh(state, dispatcher);
                false
            }
            Action::Docs(DocsAction::Export) => self.export(state, dispatcher),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::testing::{capture, drain};
    use crate::orchestrator::testing::{commit, orchestrator, FakeBackend, FakeMeta};
    use crate::reducers::reduce;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::Receiver;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    const URL: &str = "https://github.com/o/r";

    fn middleware(runtime: &Runtime, backend: Arc<FakeBackend>) -> DocsMiddleware {
        DocsMiddleware::new(
            runtime.handle().clone(),
            Arc::new(orchestrator(backend, FakeMeta(Ok(Some("demo".to_string()))))),
        )
    }

    fn generate(url: &str) -> Action {
        Action::Docs(DocsAction::Generate {
            repo_url: url.to_string(),
            max_commits: 20,
        })
    }

    fn alerts(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Alert(AlertAction::Show(message)) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Wait for the spawned task to report `count` more actions
    fn wait_for(rx: &Receiver<Action>, count: usize) -> Vec<Action> {
        (0..count)
            .map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_url_alerts_once_without_request() {
        let runtime = Runtime::new().unwrap();
        let backend = Arc::new(FakeBackend::with_commits(vec![commit("a")]));
        let mut middleware = middleware(&runtime, backend.clone());
        let (dispatcher, rx) = capture();

        let forwarded = middleware.handle(&generate(""), &AppState::default(), &dispatcher);
        assert!(!forwarded);

        runtime.block_on(async { tokio::time::sleep(Duration::from_millis(50)).await });
        let actions = drain(&rx);
        assert_eq!(alerts(&actions), vec!["Please enter a GitHub repository URL!"]);
        assert_eq!(actions.len(), 1);
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_generate_loads_and_subscribes() {
        let runtime = Runtime::new().unwrap();
        let backend = Arc::new(FakeBackend::with_commits(vec![commit("b"), commit("a")]));
        let mut middleware = middleware(&runtime, backend.clone());
        let (dispatcher, rx) = capture();

        assert!(middleware.handle(&generate(URL), &AppState::default(), &dispatcher));

        let actions = wait_for(&rx, 5);
        assert!(matches!(
            &actions[0],
            Action::LiveUpdate(LiveUpdateAction::Subscribe { repo_url }) if repo_url == URL
        ));
        match &actions[2] {
            Action::Docs(DocsAction::Loaded {
                project, commits, ..
            }) => {
                assert_eq!(project.title, "r");
                assert_eq!(project.description, "demo");
                assert_eq!(commits.len(), 2);
            }
            other => panic!("unexpected action {:?}", other),
        }
        assert!(matches!(
            &actions[3],
            Action::Event(Event::DocsGenerated { max_commits: 20, .. })
        ));
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_backend_failure_alerts_and_keeps_list() {
        let runtime = Runtime::new().unwrap();
        let mut middleware = middleware(&runtime, Arc::new(FakeBackend::failing()));
        let (dispatcher, rx) = capture();

        let mut state = AppState::default();
        state.commit_list.commits = vec![commit("old")];
        // Already subscribed for this repository
        state.live_update.active = Some(crate::live_listener::SubscriptionId(1));
        state.live_update.repo_url = Some(URL.to_string());

        assert!(middleware.handle(&generate(URL), &state, &dispatcher));
        let state = reduce(state, &generate(URL));

        let actions = wait_for(&rx, 4);
        assert_eq!(
            alerts(&actions),
            vec!["Error fetching documentation. Please check backend connection."]
        );
        let state = actions.iter().fold(state, reduce);
        assert!(!state.session.is_loading());
        assert_eq!(state.commit_list.commits, vec![commit("old")]);
    }

    #[test]
    fn test_export_empty_list_alerts() {
        let runtime = Runtime::new().unwrap();
        let mut middleware = middleware(&runtime, Arc::new(FakeBackend::default()));
        let (dispatcher, rx) = capture();

        let forwarded = middleware.handle(
            &Action::Docs(DocsAction::Export),
            &AppState::default(),
            &dispatcher,
        );

        assert!(!forwarded);
        assert_eq!(alerts(&drain(&rx)), vec!["No commits to generate PDF!"]);
    }

    #[test]
    fn test_export_writes_configured_file() {
        let runtime = Runtime::new().unwrap();
        let mut middleware = middleware(&runtime, Arc::new(FakeBackend::default()));
        let (dispatcher, rx) = capture();
        let dir = tempfile::tempdir().unwrap();

        let mut state = AppState::default();
        state.config.output_dir = dir.path().to_path_buf();
        state.commit_list.commits = vec![commit("a")];

        assert!(middleware.handle(&Action::Docs(DocsAction::Export), &state, &dispatcher));

        let actions = wait_for(&rx, 3);
        let expected = dir.path().join("gitdocify_documentation.pdf");
        assert!(matches!(
            &actions[2],
            Action::Docs(DocsAction::Exported(path)) if *path == expected
        ));
        assert!(expected.exists());
    }

    #[test]
    fn test_second_export_waits_for_first() {
        let runtime = Runtime::new().unwrap();
        let mut middleware = middleware(&runtime, Arc::new(FakeBackend::default()));
        let (dispatcher, rx) = capture();

        let mut state = AppState::default();
        state.commit_list.commits = vec![commit("a")];
        state.session.exporting = true;

        assert!(!middleware.handle(&Action::Docs(DocsAction::Export), &state, &dispatcher));
        let actions = drain(&rx);
        assert!(alerts(&actions).is_empty());
        assert!(matches!(&actions[..], [Action::StatusBar(_)]));
    }

    #[test]
    fn test_refresh_reuses_session() {
        let runtime = Runtime::new().unwrap();
        let mut middleware = middleware(&runtime, Arc::new(FakeBackend::default()));
        let (dispatcher, rx) = capture();

        let mut state = AppState::default();
        state.session.repo_url = Some(URL.to_string());
        state.session.max_commits = Some(3);

        assert!(!middleware.handle(&Action::Docs(DocsAction::Refresh), &state, &dispatcher));
        assert!(matches!(
            &drain(&rx)[..],
            [Action::Docs(DocsAction::Generate { repo_url, max_commits: 3 })] if repo_url == URL
        ));
    }
}
