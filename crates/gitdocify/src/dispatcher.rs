//! Dispatcher for middleware action dispatch
//!
//! Actions sent through the [`Dispatcher`] re-enter the middleware chain from
//! the beginning (via the action channel of the background worker). This is
//! how a submitted repository form turns into `DocsAction::Generate`, and how
//! background tasks report their results.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// `action_tx` must feed the background worker
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Send an action through the full middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::mpsc::{channel, Receiver};

    /// A dispatcher whose actions end up in the returned receiver
    pub fn capture() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = channel();
        (Dispatcher::new(tx), rx)
    }

    /// Everything dispatched so far
    pub fn drain(rx: &Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }
}
