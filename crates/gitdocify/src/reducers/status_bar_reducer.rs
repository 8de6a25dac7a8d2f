//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    let StatusBarAction::Push {
        kind,
        message,
        source,
    } = action;
    state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
    state
}
