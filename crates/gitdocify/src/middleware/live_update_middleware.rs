//! Live Update Middleware
//!
//! Owns the one live subscription. Subscribing cancels the previous
//! listener task before starting a new one under a fresh
//! [`SubscriptionId`]; reports of any other id are dropped here, before
//! they reach the reducers.

use crate::actions::{Action, GlobalAction, LiveUpdateAction};
use crate::dispatcher::Dispatcher;
use crate::live_listener::{LiveListener, SubscriptionId};
use crate::middleware::Middleware;
use crate::orchestrator::FetchOrchestrator;
use crate::state::AppState;
use docify_client::PushChannel;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

pub struct LiveUpdateMiddleware {
    runtime: Handle,
    channel: Arc<dyn PushChannel>,
    orchestrator: Arc<FetchOrchestrator>,
    current: Option<(SubscriptionId, CancellationToken)>,
    last_id: SubscriptionId,
}

impl LiveUpdateMiddleware {
    pub fn new(
        runtime: Handle,
        channel: Arc<dyn PushChannel>,
        orchestrator: Arc<FetchOrchestrator>,
    ) -> Self {
        Self {
            runtime,
            channel,
            orchestrator,
            current: None,
            last_id: SubscriptionId::default(),
        }
    }

    fn subscribe(&mut self, repo_url: &str, dispatcher: &Dispatcher) {
        self.teardown();

        let id = self.last_id.next();
        self.last_id = id;
        let cancel = CancellationToken::new();
        self.current = Some((id, cancel.clone()));

        dispatcher.dispatch(Action::LiveUpdate(LiveUpdateAction::Connecting {
            id,
            repo_url: repo_url.to_string(),
        }));

        let listener = LiveListener {
            id,
            repo_url: repo_url.to_string(),
            channel: Arc::clone(&self.channel),
            orchestrator: Arc::clone(&self.orchestrator),
            cancel,
        };
        self.runtime.spawn(listener.run(dispatcher.clone()));
    }

    fn teardown(&mut self) {
        if let Some((id, cancel)) = self.current.take() {
            log::info!("Live updates {}: tearing down", id);
            cancel.cancel();
        }
    }

    fn is_current(&self, id: SubscriptionId) -> bool {
        matches!(self.current, Some((current, _)) if current == id)
    }
}

impl Middleware for LiveUpdateMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::LiveUpdate(LiveUpdateAction::Subscribe { repo_url }) => {
                self.subscribe(repo_url, dispatcher);
                false
            }
            Action::Global(GlobalAction::Quit) => {
                self.teardown();
                true
            }
            Action::LiveUpdate(
                LiveUpdateAction::Opened { id }
                | LiveUpdateAction::Closed { id }
                | LiveUpdateAction::CommitPushed { id, .. },
            ) => {
                if !self.is_current(*id) {
                    log::debug!("Dropping report of stale subscription {}", id);
                    return false;
                }
                true
            }
            _ => true,
        }
    }
}

impl Drop for LiveUpdateMiddleware {
    fn drop(&mut self) {
        self.teardown();
    }
}
