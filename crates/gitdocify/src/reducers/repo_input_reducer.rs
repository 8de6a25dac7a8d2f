//! Repository Input Form Reducer

use crate::actions::RepoInputAction;
use crate::state::RepoInputState;

pub fn reduce(mut state: RepoInputState, action: &RepoInputAction) -> RepoInputState {
    match action {
        RepoInputAction::Char(c) => state.push_char(*c),
        RepoInputAction::Backspace => state.backspace(),
        RepoInputAction::ClearField => state.clear_field(),
        RepoInputAction::NextField => state.focused_field = state.focused_field.next(),
        RepoInputAction::PrevField => state.focused_field = state.focused_field.prev(),
        RepoInputAction::HistoryOlder => state.history_older(),
        RepoInputAction::HistoryNewer => state.history_newer(),
        RepoInputAction::Prefill {
            repo_url,
            max_commits,
        } => {
            state.fill(repo_url, *max_commits);
            state.history_index = None;
        }
        RepoInputAction::RecentLoaded(recent) => {
            state.recent = recent.clone();
            state.history_index = None;
        }
        // View stack changes are handled by the app reducer
        RepoInputAction::Open | RepoInputAction::Submit | RepoInputAction::Close => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RepoInputField;
    use pretty_assertions::assert_eq;

    fn type_text(mut state: RepoInputState, text: &str) -> RepoInputState {
        for c in text.chars() {
            state = reduce(state, &RepoInputAction::Char(c));
        }
        state
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let state = type_text(RepoInputState::default(), "https://github.com/o/r");
        let state = reduce(state, &RepoInputAction::NextField);
        let state = type_text(state, "15");

        assert_eq!(state.url, "https://github.com/o/r");
        assert_eq!(state.max_commits, "15");
        assert_eq!(state.focused_field, RepoInputField::MaxCommits);
    }

    #[test]
    fn test_backspace_and_clear() {
        let state = type_text(RepoInputState::default(), "abc");
        let state = reduce(state, &RepoInputAction::Backspace);
        assert_eq!(state.url, "ab");
        let state = reduce(state, &RepoInputAction::ClearField);
        assert_eq!(state.url, "");
    }

    #[test]
    fn test_prefill_focuses_url() {
        let mut state = RepoInputState::default();
        state.focused_field = RepoInputField::MaxCommits;
        let state = reduce(
            state,
            &RepoInputAction::Prefill {
                repo_url: "https://github.com/o/r".to_string(),
                max_commits: 20,
            },
        );
        assert_eq!(state.url, "https://github.com/o/r");
        assert_eq!(state.max_commits, "20");
        assert_eq!(state.focused_field, RepoInputField::Url);
    }
}
