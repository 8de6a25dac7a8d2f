//! Backend data transfer objects
//!
//! These types mirror the JSON returned by the documentation backend and the
//! messages pushed over the live update channel. Missing optional fields
//! deserialize to defaults so partially populated records are accepted.

use serde::{Deserialize, Serialize};

/// Description shown when the repository metadata lookup yields nothing
pub const NO_DESCRIPTION: &str = "No description available";

/// Shown in place of missing code notes
pub const NO_NOTES: &str = "// No notes";

/// `message` value of the live update event announcing a new commit
pub const NEW_COMMIT_MESSAGE: &str = "New commit detected";

/// One documented commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Short commit identifier, used as the list key
    pub sha: String,

    /// Author name
    #[serde(default)]
    pub author: String,

    /// Author email
    #[serde(default)]
    pub email: String,

    /// Commit timestamp as reported by the backend
    #[serde(default)]
    pub date: String,

    /// Raw commit message (may be empty)
    #[serde(default)]
    pub message: String,

    /// AI generated one-line summary
    #[serde(default)]
    pub summary: String,

    /// AI generated notes about the code change
    #[serde(default)]
    pub code_notes: Option<String>,

    /// Per-file changes, in backend order
    #[serde(default)]
    pub files: Vec<FileDiff>,
}

impl Commit {
    /// Code notes, treating an empty string the same as an absent value
    pub fn notes(&self) -> Option<&str> {
        self.code_notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Before/after content of one file within a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// File path
    pub file: String,

    /// Content before the change (absent when the file was added)
    #[serde(default)]
    pub before: Option<String>,

    /// Content after the change (absent when the file was removed)
    #[serde(default)]
    pub after: Option<String>,
}

impl FileDiff {
    pub fn before_text(&self) -> Option<&str> {
        self.before.as_deref().filter(|s| !s.is_empty())
    }

    pub fn after_text(&self) -> Option<&str> {
        self.after.as_deref().filter(|s| !s.is_empty())
    }
}

/// Project header derived from the repository URL and GitHub metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    pub description: String,
}

impl ProjectMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Project with the placeholder description
    pub fn without_description(title: impl Into<String>) -> Self {
        Self::new(title, NO_DESCRIPTION)
    }
}

/// Body of `POST /generate_docs`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDocsRequest<'a> {
    pub repo_url: &'a str,
    pub max_commits: u32,
}

/// Response of `POST /generate_docs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateDocsResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub commits: Vec<Commit>,
}

/// Subscription request sent when the push channel opens
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SubscribeRequest<'a> {
    pub repo_url: &'a str,
}

/// A message received on the live update channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveUpdateMessage {
    /// The backend saw a new head commit
    NewCommit {
        sha: Option<String>,
        author: String,
        message_text: String,
    },
    /// The backend reported an error for this subscription
    Error(String),
    /// Any other payload; kept verbatim for logging
    Other(String),
}

#[derive(Deserialize)]
struct RawLiveUpdate {
    message: Option<String>,
    sha: Option<String>,
    author: Option<String>,
    message_text: Option<String>,
    error: Option<String>,
}

impl LiveUpdateMessage {
    /// Classify a raw text frame. Never fails: unknown shapes become `Other`.
    pub fn parse(raw: &str) -> Self {
        let Ok(parsed) = serde_json::from_str::<RawLiveUpdate>(raw) else {
            return Self::Other(raw.to_string());
        };

        if parsed.message.as_deref() == Some(NEW_COMMIT_MESSAGE) {
            return Self::NewCommit {
                sha: parsed.sha,
                author: parsed.author.unwrap_or_default(),
                message_text: parsed.message_text.unwrap_or_default(),
            };
        }

        match parsed.error {
            Some(error) => Self::Error(error),
            None => Self::Other(raw.to_string()),
        }
    }
}
