use crate::actions::{Action, AlertAction, GlobalAction, RepoInputAction};
use crate::reducers::{
    alert_reducer, commit_list_reducer, docs_reducer, live_update_reducer, repo_input_reducer,
    status_bar_reducer,
};
use crate::state::AppState;
use crate::views::{AlertView, View, ViewId};

/// Root reducer: view stack first, then one sub-reducer per slice
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),
        Action::RepoInput(RepoInputAction::Close) => remove_view(&mut state, ViewId::RepoInput),
        Action::Alert(alert) => return reduce_alert(state, alert),
        _ => {}
    }

    match action {
        Action::RepoInput(a) => state.repo_input = repo_input_reducer::reduce(state.repo_input, a),
        Action::CommitList(a) => {
            state.commit_list = commit_list_reducer::reduce(state.commit_list, a)
        }
        Action::Docs(a) => docs_reducer::reduce(&mut state.session, &mut state.commit_list, a),
        Action::LiveUpdate(a) => {
            live_update_reducer::reduce(&mut state.live_update, &mut state.commit_list, a)
        }
        Action::StatusBar(a) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, a)
        }
        _ => {}
    }

    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            let on_top = state
                .active_view()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if on_top {
                log::debug!("View already on top: {:?}", new_view.view_id());
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            if state.active_view().map(|v| v.view_id()) == Some(ViewId::Alert) {
                return reduce_alert(state, &AlertAction::Dismiss);
            }
            // The base view stays; quitting is explicit
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            }
        }
        // Translated by the keyboard middleware
        GlobalAction::KeyPressed(_) => {}
    }
    state
}

/// Keeps exactly one alert view on the stack while the queue is non-empty
fn reduce_alert(mut state: AppState, action: &AlertAction) -> AppState {
    let was_empty = state.alert.is_empty();
    state.alert = alert_reducer::reduce(state.alert, action);

    match action {
        AlertAction::Show(_) if was_empty => {
            let view: Box<dyn View> = Box::new(AlertView::new());
            state.view_stack.push(view);
        }
        AlertAction::Dismiss if state.alert.is_empty() => remove_view(&mut state, ViewId::Alert),
        _ => {}
    }
    state
}

/// Remove the top-most view with `id`, wherever it sits in the stack
fn remove_view(state: &mut AppState, id: ViewId) {
    if state.view_stack.len() <= 1 {
        return;
    }
    if let Some(index) = state.view_stack.iter().rposition(|v| v.view_id() == id) {
        state.view_stack.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommitListAction, DocsAction, LiveUpdateAction};
    use crate::live_listener::SubscriptionId;
    use crate::views::RepoInputView;
    use docify_client::{Commit, ConnectionState, ProjectMeta};
    use pretty_assertions::assert_eq;

    fn view_ids(state: &AppState) -> Vec<ViewId> {
        state.view_stack.iter().map(|v| v.view_id()).collect()
    }

    fn push_repo_input(state: AppState) -> AppState {
        reduce(
            state,
            &Action::Global(GlobalAction::PushView(Box::new(RepoInputView::new()))),
        )
    }

    fn commit(sha: &str) -> Commit {
        Commit {
            sha: sha.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_quit() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_push_view_skips_duplicate() {
        let state = push_repo_input(AppState::default());
        let state = push_repo_input(state);
        assert_eq!(view_ids(&state), vec![ViewId::CommitList, ViewId::RepoInput]);
    }

    #[test]
    fn test_close_keeps_base_view() {
        let state = push_repo_input(AppState::default());
        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList]);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList]);
        assert!(state.running);
    }

    #[test]
    fn test_form_close_removes_form_only() {
        let state = push_repo_input(AppState::default());
        let state = reduce(state, &Action::RepoInput(RepoInputAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList]);

        let state = reduce(state, &Action::RepoInput(RepoInputAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList]);
    }

    #[test]
    fn test_alert_view_lifecycle() {
        let state = reduce(AppState::default(), &Action::Alert(AlertAction::show("one")));
        let state = reduce(state, &Action::Alert(AlertAction::show("two")));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList, ViewId::Alert]);
        assert_eq!(state.alert.current(), Some("one"));

        // Esc on an alert dismisses it
        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(state.alert.current(), Some("two"));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList, ViewId::Alert]);

        let state = reduce(state, &Action::Alert(AlertAction::Dismiss));
        assert!(state.alert.is_empty());
        assert_eq!(view_ids(&state), vec![ViewId::CommitList]);
    }

    #[test]
    fn test_alert_above_form() {
        let state = push_repo_input(AppState::default());
        let state = reduce(state, &Action::Alert(AlertAction::show("bad url")));
        assert_eq!(
            view_ids(&state),
            vec![ViewId::CommitList, ViewId::RepoInput, ViewId::Alert]
        );

        let state = reduce(state, &Action::Alert(AlertAction::Dismiss));
        assert_eq!(view_ids(&state), vec![ViewId::CommitList, ViewId::RepoInput]);
    }

    #[test]
    fn test_fan_out() {
        let state = reduce(
            AppState::default(),
            &Action::Docs(DocsAction::Generate {
                repo_url: "https://github.com/o/r".to_string(),
                max_commits: 5,
            }),
        );
        let state = reduce(
            state,
            &Action::Docs(DocsAction::Loaded {
                repo_url: "https://github.com/o/r".to_string(),
                project: ProjectMeta::without_description("r"),
                commits: vec![commit("b"), commit("a")],
            }),
        );
        let state = reduce(state, &Action::CommitList(CommitListAction::NavigateNext));
        assert_eq!(state.commit_list.cursor, 1);

        let state = reduce(
            state,
            &Action::LiveUpdate(LiveUpdateAction::Connecting {
                id: SubscriptionId(7),
                repo_url: "https://github.com/o/r".to_string(),
            }),
        );
        let state = reduce(
            state,
            &Action::LiveUpdate(LiveUpdateAction::CommitPushed {
                id: SubscriptionId(7),
                commit: commit("c"),
            }),
        );

        assert_eq!(state.live_update.connection, ConnectionState::Connecting);
        let shas: Vec<_> = state.commit_list.commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["c", "b", "a"]);
        // Still on "a"
        assert_eq!(state.commit_list.cursor, 2);
    }
}
