//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions
//! using the active view's translate_navigation method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Navigate(nav) = action else {
            return true;
        };

        match state.active_view().and_then(|view| view.translate_navigation(*nav)) {
            Some(translated) => {
                log::debug!("NavigationMiddleware: {:?} -> {:?}", nav, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Navigation not handled by active view: {:?}", nav),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommitListAction, GlobalAction, NavigationAction, RepoInputAction};
    use crate::dispatcher::testing::{capture, drain};
    use crate::reducers::reduce;
    use crate::views::RepoInputView;

    #[test]
    fn test_translated_by_active_view() {
        let (dispatcher, rx) = capture();
        let mut middleware = NavigationMiddleware::new();
        let state = AppState::default();

        let forwarded = middleware.handle(
            &Action::Navigate(NavigationAction::ToBottom),
            &state,
            &dispatcher,
        );

        assert!(!forwarded);
        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::CommitList(CommitListAction::NavigateToBottom)
        ));

        let state = reduce(
            state,
            &Action::Global(GlobalAction::PushView(Box::new(RepoInputView::new()))),
        );
        middleware.handle(&Action::Navigate(NavigationAction::Previous), &state, &dispatcher);
        assert!(matches!(
            drain(&rx)[..],
            [Action::RepoInput(RepoInputAction::HistoryOlder)]
        ));
    }
}
