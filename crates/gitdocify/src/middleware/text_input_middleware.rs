//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into view-specific actions
//! using the active view's translate_text_input method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::TextInput(input) = action else {
            return true;
        };

        match state
            .active_view()
            .and_then(|view| view.translate_text_input(input.clone()))
        {
            Some(translated) => {
                log::debug!("TextInputMiddleware: {:?} -> {:?}", input, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("TextInput not handled by active view: {:?}", input),
        }
        false
    }
}
