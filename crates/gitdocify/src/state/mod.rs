//! Application State Module
//!
//! All state types used by the application, organized by feature.

mod alert;
mod app;
mod commit_list;
mod live_update;
mod repo_input;
mod session;
mod status_bar;

pub use alert::AlertState;
pub use app::AppState;
pub use commit_list::{CommitListState, ListTarget};
pub use live_update::LiveUpdateState;
pub use repo_input::{RepoInputField, RepoInputState};
pub use session::SessionState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
