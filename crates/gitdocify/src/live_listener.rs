//! Live update listener
//!
//! One task per subscription. The task connects the push channel, reports
//! the connection state and turns "new commit" notifications into a
//! single-commit fetch. Everything it learns goes back through the
//! [`Dispatcher`]; once its [`CancellationToken`] is cancelled it dispatches
//! nothing at all.

use crate::actions::{Action, AlertAction, LiveUpdateAction};
use crate::dispatcher::Dispatcher;
use crate::orchestrator::FetchOrchestrator;
use docify_client::{LiveUpdateMessage, PushChannel};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Identifies one subscription; results of older ones are ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl SubscriptionId {
    pub fn next(self) -> Self {
        SubscriptionId(self.0 + 1)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Alert text for a new commit notification
pub fn new_commit_alert(author: &str, message_text: &str) -> String {
    format!("🔥 New commit by {}: {}", author, message_text)
}

/// Everything a subscription task needs
pub struct LiveListener {
    pub id: SubscriptionId,
    pub repo_url: String,
    pub channel: Arc<dyn PushChannel>,
    pub orchestrator: Arc<FetchOrchestrator>,
    pub cancel: CancellationToken,
}

impl LiveListener {
    /// Run until the channel closes, fails or the token is cancelled
    pub async fn run(self, dispatcher: Dispatcher) {
        let id = self.id;
        log::info!("Live updates {}: connecting for {}", id, self.repo_url);

        let connected = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                log::debug!("Live updates {}: cancelled while connecting", id);
                return;
            }
            result = self.channel.connect(&self.repo_url) => result,
        };

        let mut subscription = match connected {
            Ok(subscription) => subscription,
            Err(e) => {
                log::warn!("Live updates {}: connection failed: {:#}", id, e);
                self.report(&dispatcher, LiveUpdateAction::Closed { id });
                return;
            }
        };

        self.report(&dispatcher, LiveUpdateAction::Opened { id });
        log::info!("Live updates {}: open", id);

        loop {
            let frame = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                frame = subscription.next_message() => frame,
            };

            match frame {
                Some(Ok(text)) => self.handle_frame(&text, &dispatcher).await,
                Some(Err(e)) => {
                    log::warn!("Live updates {}: connection error: {:#}", id, e);
                    break;
                }
                None => {
                    log::info!("Live updates {}: closed by server", id);
                    break;
                }
            }
        }

        subscription.close().await;
        log::debug!("Live updates {}: connection closed", id);
        self.report(&dispatcher, LiveUpdateAction::Closed { id });
    }

    async fn handle_frame(&self, text: &str, dispatcher: &Dispatcher) {
        if self.cancel.is_cancelled() {
            return;
        }

        match LiveUpdateMessage::parse(text) {
            LiveUpdateMessage::NewCommit {
                sha,
                author,
                message_text,
            } => {
                log::info!(
                    "Live updates {}: new commit {} by {}",
                    self.id,
                    sha.as_deref().unwrap_or("?"),
                    author
                );
                dispatcher.dispatch(Action::Alert(AlertAction::show(new_commit_alert(
                    &author,
                    &message_text,
                ))));
                self.fetch_new_commit(dispatcher).await;
            }
            LiveUpdateMessage::Error(error) => {
                log::warn!("Live updates {}: backend error: {}", self.id, error);
            }
            LiveUpdateMessage::Other(raw) => {
                log::debug!("Live updates {}: ignoring message {}", self.id, raw);
            }
        }
    }

    async fn fetch_new_commit(&self, dispatcher: &Dispatcher) {
        let fetched = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return,
            result = self.orchestrator.fetch_latest(&self.repo_url) => result,
        };

        match fetched {
            Ok(Some(commit)) => {
                self.report(
                    dispatcher,
                    LiveUpdateAction::CommitPushed {
                        id: self.id,
                        commit,
                    },
                );
            }
            Ok(None) => log::debug!("Live updates {}: backend returned no commit", self.id),
            Err(e) => log::warn!("Live updates {}: fetching new commit failed: {:#}", self.id, e),
        }
    }

    fn report(&self, dispatcher: &Dispatcher, action: LiveUpdateAction) {
        if self.cancel.is_cancelled() {
            log::debug!("Live updates {}: dropping {:?} after teardown", self.id, action);
            return;
        }
        dispatcher.dispatch(Action::LiveUpdate(action));
    }
}
