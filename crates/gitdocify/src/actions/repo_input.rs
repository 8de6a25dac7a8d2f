//! Repository input form actions

use docify_config::RecentRepositories;

#[derive(Debug, Clone)]
pub enum RepoInputAction {
    /// Open the form, pre-filled with the current repository
    Open,
    /// Character typed into the focused field
    Char(char),
    /// Remove the last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Fill the form with an older entry of the history
    HistoryOlder,
    /// Fill the form with a newer entry of the history
    HistoryNewer,
    /// Submit the form
    Submit,
    /// Close the form without submitting
    Close,
    /// Pre-fill the URL and commit limit
    Prefill { repo_url: String, max_commits: u32 },
    /// Recent repositories were loaded or updated
    RecentLoaded(RecentRepositories),
}
