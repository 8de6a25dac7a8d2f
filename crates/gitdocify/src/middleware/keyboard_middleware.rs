//! KeyboardMiddleware - translates key presses into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C always quits. Esc goes to the text input of the active view when
//! it has one, otherwise it closes the view.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive characters, Backspace, Enter and Tab as
//! text input actions. Up/Down still navigate when the view also supports
//! item navigation.
//!
//! ## Layer 3: Keymap + Gating
//! Look up the key in the keymap, then dispatch the first command the
//! active view accepts.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: capability routing
        if capabilities.accepts_text_input() {
            if let Some(action) = text_input_action(&key, capabilities.supports_item_navigation()) {
                log::debug!("Layer 2: TEXT_INPUT - {:?}", action);
                dispatcher.dispatch(action);
                return;
            }
        }

        // Layer 3: keymap lookup and gating
        for command in state.keymap.match_key(&key) {
            let action = command.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: {:?} rejected by view {:?}",
                        command,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: dispatching {:?}", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Key handling inside a text input view; None falls through to the keymap
fn text_input_action(key: &KeyEvent, item_navigation: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let input = match key.code {
        KeyCode::Char('u') if ctrl => TextInputAction::ClearLine,
        KeyCode::Char(c) if !ctrl && !alt => TextInputAction::Char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            TextInputAction::ClearLine
        }
        KeyCode::Backspace => TextInputAction::Backspace,
        KeyCode::Enter => TextInputAction::Confirm,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            TextInputAction::PreviousField
        }
        KeyCode::Tab => TextInputAction::NextField,
        KeyCode::BackTab => TextInputAction::PreviousField,
        KeyCode::Down if item_navigation => return Some(Action::Navigate(NavigationAction::Next)),
        KeyCode::Up if item_navigation => {
            return Some(Action::Navigate(NavigationAction::Previous))
        }
        _ => return None,
    };
    Some(Action::TextInput(input))
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Unhandled keys are consumed too
            return false;
        }
        true
    }
}
