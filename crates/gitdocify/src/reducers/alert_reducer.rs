use crate::actions::AlertAction;
use crate::state::AlertState;

/// Alerts queue up; only the oldest one is on screen
pub fn reduce(mut state: AlertState, action: &AlertAction) -> AlertState {
    match action {
        AlertAction::Show(message) => state.queue.push_back(message.clone()),
        AlertAction::Dismiss => {
            state.queue.pop_front();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alerts_are_shown_in_order() {
        let state = reduce(AlertState::default(), &AlertAction::show("first"));
        let state = reduce(state, &AlertAction::show("second"));
        assert_eq!(state.current(), Some("first"));
        assert_eq!(state.pending(), 1);

        let state = reduce(state, &AlertAction::Dismiss);
        assert_eq!(state.current(), Some("second"));

        let state = reduce(state, &AlertAction::Dismiss);
        assert!(state.is_empty());

        let state = reduce(state, &AlertAction::Dismiss);
        assert!(state.is_empty());
    }
}
