//! Session State
//!
//! The repository being documented and what is currently in flight.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Repository of the commit list on screen
    pub repo_url: Option<String>,
    /// Commit limit of the last generate request
    pub max_commits: Option<u32>,
    /// Repository of the generate request in flight
    pub loading: Option<String>,
    pub exporting: bool,
    pub last_export: Option<PathBuf>,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }
}
