//! Live Update Reducer
//!
//! Only the active subscription may change state. Anything reported by an
//! older one (a late message, a late fetch) is ignored.

use crate::actions::LiveUpdateAction;
use crate::state::{CommitListState, LiveUpdateState};
use docify_client::ConnectionState;

pub fn reduce(
    live: &mut LiveUpdateState,
    commit_list: &mut CommitListState,
    action: &LiveUpdateAction,
) {
    match action {
        LiveUpdateAction::Connecting { id, repo_url } => {
            live.active = Some(*id);
            live.repo_url = Some(repo_url.clone());
            live.connection = ConnectionState::Connecting;
        }
        LiveUpdateAction::Opened { id } if live.is_active(*id) => {
            live.connection = ConnectionState::Open;
        }
        LiveUpdateAction::Closed { id } if live.is_active(*id) => {
            live.connection = ConnectionState::Closed;
        }
        LiveUpdateAction::CommitPushed { id, commit } if live.is_active(*id) => {
            commit_list.insert_front(commit.clone());
        }
        LiveUpdateAction::Opened { id }
        | LiveUpdateAction::Closed { id }
        | LiveUpdateAction::CommitPushed { id, .. } => {
            log::debug!("Ignoring update from inactive subscription {}", id);
        }
        // Consumed by the live update middleware
        LiveUpdateAction::Subscribe { .. } => {}
    }
}
