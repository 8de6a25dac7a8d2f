//! Live update subscription state

use crate::live_listener::SubscriptionId;
use docify_client::ConnectionState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveUpdateState {
    /// The only subscription whose results are applied
    pub active: Option<SubscriptionId>,
    pub repo_url: Option<String>,
    pub connection: ConnectionState,
}

impl LiveUpdateState {
    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.active == Some(id)
    }
}
