//! Commit List Reducer

use crate::actions::CommitListAction;
use crate::state::CommitListState;

pub fn reduce(mut state: CommitListState, action: &CommitListAction) -> CommitListState {
    match action {
        CommitListAction::NavigateNext => state.move_next(),
        CommitListAction::NavigatePrevious => state.move_previous(),
        CommitListAction::NavigateToTop => state.move_to_top(),
        CommitListAction::NavigateToBottom => state.move_to_bottom(),
        CommitListAction::Toggle => state.toggle(),
        CommitListAction::ExpandAll => state.expand_all(),
        CommitListAction::CollapseAll => state.collapse_all(),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ListTarget;
    use docify_client::{Commit, FileDiff, ProjectMeta};
    use pretty_assertions::assert_eq;

    fn state() -> CommitListState {
        let commits = ["a", "b"]
            .iter()
            .map(|sha| Commit {
                sha: sha.to_string(),
                files: vec![FileDiff::default(), FileDiff::default()],
                ..Default::default()
            })
            .collect();
        let mut state = CommitListState::default();
        state.replace(ProjectMeta::without_description("x"), commits);
        state
    }

    #[test]
    fn test_navigation_and_toggle_sequence() {
        let mut s = state();
        for action in [
            CommitListAction::NavigateToBottom,
            CommitListAction::Toggle,
            CommitListAction::NavigateNext,
            CommitListAction::NavigateNext,
            CommitListAction::Toggle,
        ] {
            s = reduce(s, &action);
        }

        assert_eq!(s.selected(), Some(ListTarget::File(1, 1)));
        assert!(s.is_commit_expanded("b"));
        assert!(s.is_file_expanded("b", 1));
        assert!(!s.is_commit_expanded("a"));

        let s = reduce(s, &CommitListAction::NavigateToTop);
        assert_eq!(s.selected(), Some(ListTarget::Commit(0)));
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let s = reduce(state(), &CommitListAction::ExpandAll);
        assert_eq!(s.targets().len(), 6);
        let s = reduce(s, &CommitListAction::CollapseAll);
        assert_eq!(s.targets().len(), 2);
    }
}
