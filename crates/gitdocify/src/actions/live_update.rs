//! Live update subscription actions

use crate::live_listener::SubscriptionId;
use docify_client::Commit;

#[derive(Debug, Clone)]
pub enum LiveUpdateAction {
    /// Open a subscription for this repository, closing any previous one
    Subscribe { repo_url: String },
    /// A subscription was started and is connecting
    Connecting { id: SubscriptionId, repo_url: String },
    /// The subscription request was sent
    Opened { id: SubscriptionId },
    /// The connection ended
    Closed { id: SubscriptionId },
    /// A new commit was announced and fetched
    CommitPushed { id: SubscriptionId, commit: Commit },
}
