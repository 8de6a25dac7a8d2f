//! Background worker thread that processes actions through middleware
//!
//! The main thread only renders and reads the terminal. Every action is
//! sent to this worker, passes the middleware chain, and unless a
//! middleware consumed it, is handed back to the main thread for the
//! reducers. Network and file work is spawned from middleware onto the
//! shared tokio runtime.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from the [`Dispatcher`]
/// - `action_tx`: used to build the [`Dispatcher`] handed to middleware
/// - `result_tx`: non-consumed actions, sent to the main thread for reducers
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");
    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(action) => action,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        let quitting = matches!(action, Action::Global(GlobalAction::Quit));

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let should_forward = run_chain(&mut middleware, &action, &current_state, &dispatcher);

        // Events are only observed by middleware
        if (should_forward || quitting)
            && !matches!(action, Action::Event(_))
            && result_tx.send(action).is_err()
        {
            log::error!("Result channel disconnected, shutting down");
            break;
        }

        if quitting {
            log::info!("Background worker received shutdown signal");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run `action` through the chain; false if a middleware consumed it
pub(crate) fn run_chain(
    middleware: &mut [Box<dyn Middleware + Send>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}
