//! Context Action Translation Middleware
//!
//! Enter, Space, `o` and `c` mean different things per view; the active
//! view decides.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct ViewContextMiddleware;

impl ViewContextMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ViewContextMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::ViewContext(context) = action else {
            return true;
        };

        match state
            .active_view()
            .and_then(|view| view.translate_context_action(*context, state))
        {
            Some(translated) => {
                log::debug!("ViewContextMiddleware: {:?} -> {:?}", context, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Context action not handled by active view: {:?}", context),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{AlertAction, CommitListAction, ContextAction};
    use crate::dispatcher::testing::{capture, drain};
    use crate::reducers::reduce;

    #[test]
    fn test_enter_toggles_commit_or_dismisses_alert() {
        let (dispatcher, rx) = capture();
        let mut middleware = ViewContextMiddleware::new();
        let toggle = Action::ViewContext(ContextAction::ToggleSelect);

        let state = AppState::default();
        middleware.handle(&toggle, &state, &dispatcher);
        assert!(matches!(
            drain(&rx)[..],
            [Action::CommitList(CommitListAction::Toggle)]
        ));

        let state = reduce(state, &Action::Alert(AlertAction::show("oops")));
        middleware.handle(&toggle, &state, &dispatcher);
        assert!(matches!(
            drain(&rx)[..],
            [Action::Alert(AlertAction::Dismiss)]
        ));
    }
}
