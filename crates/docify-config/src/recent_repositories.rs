//! Recent repositories management
//!
//! Handles loading and saving recently documented repositories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of entries kept in the history
pub const MAX_RECENT_REPOSITORIES: usize = 10;

/// A recently documented repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRepository {
    /// Repository URL exactly as entered (trimmed)
    pub url: String,
    /// Commit limit used last time
    #[serde(default = "default_max_commits")]
    pub max_commits: u32,
    /// When documentation was last generated
    #[serde(default = "Utc::now")]
    pub last_used: DateTime<Utc>,
}

fn default_max_commits() -> u32 {
    20
}

impl RecentRepository {
    pub fn new(url: impl Into<String>, max_commits: u32) -> Self {
        Self {
            url: url.into(),
            max_commits,
            last_used: Utc::now(),
        }
    }
}

/// Most-recent-first repository history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRepositories {
    #[serde(default, rename = "repository")]
    pub entries: Vec<RecentRepository>,
}

impl RecentRepositories {
    /// Record a repository as most recent
    ///
    /// An existing entry with the same URL is moved to the front; the list is
    /// truncated to [`MAX_RECENT_REPOSITORIES`].
    pub fn push(&mut self, entry: RecentRepository) {
        self.entries.retain(|e| e.url != entry.url);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENT_REPOSITORIES);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RecentRepository> {
        self.entries.get(index)
    }

    /// Load from `path`; a missing or unreadable file gives an empty history
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("No recent repositories file found, starting fresh");
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(mut repos) => {
                repos.entries.truncate(MAX_RECENT_REPOSITORIES);
                log::info!(
                    "Loaded {} recent repositories from {}",
                    repos.len(),
                    path.display()
                );
                repos
            }
            Err(e) => {
                log::warn!("Failed to parse recent repositories file: {}", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!(
            "Saved {} recent repositories to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }
}

/// Load recent repositories from the config directory
pub fn load_recent_repositories() -> RecentRepositories {
    match crate::paths::recent_repositories_path() {
        Ok(path) => RecentRepositories::load_from(&path),
        Err(e) => {
            log::warn!("Cannot locate recent repositories file: {}", e);
            RecentRepositories::default()
        }
    }
}

/// Save recent repositories to the config directory
pub fn save_recent_repositories(repos: &RecentRepositories) -> anyhow::Result<()> {
    let path = crate::paths::recent_repositories_path()?;
    repos.save_to(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn urls(repos: &RecentRepositories) -> Vec<&str> {
        repos.entries.iter().map(|e| e.url.as_str()).collect()
    }

    #[test]
    fn test_push_most_recent_first() {
        let mut repos = RecentRepositories::default();
        repos.push(RecentRepository::new("https://github.com/a/one", 20));
        repos.push(RecentRepository::new("https://github.com/a/two", 20));
        assert_eq!(
            urls(&repos),
            vec!["https://github.com/a/two", "https://github.com/a/one"]
        );
    }

    #[test]
    fn test_push_deduplicates() {
        let mut repos = RecentRepositories::default();
        repos.push(RecentRepository::new("https://github.com/a/one", 20));
        repos.push(RecentRepository::new("https://github.com/a/two", 20));
        repos.push(RecentRepository::new("https://github.com/a/one", 5));
        assert_eq!(
            urls(&repos),
            vec!["https://github.com/a/one", "https://github.com/a/two"]
        );
        assert_eq!(repos.entries[0].max_commits, 5);
    }

    #[test]
    fn test_push_caps_history() {
        let mut repos = RecentRepositories::default();
        for i in 0..15 {
            repos.push(RecentRepository::new(format!("https://github.com/a/r{}", i), 20));
        }
        assert_eq!(repos.len(), MAX_RECENT_REPOSITORIES);
        assert_eq!(repos.entries[0].url, "https://github.com/a/r14");
        assert_eq!(repos.entries[9].url, "https://github.com/a/r5");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent-repositories.toml");

        let mut repos = RecentRepositories::default();
        repos.push(RecentRepository::new("https://github.com/octocat/Hello-World", 7));
        repos.save_to(&path).unwrap();

        let loaded = RecentRepositories::load_from(&path);
        assert_eq!(loaded, repos);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RecentRepositories::load_from(&dir.path().join("absent.toml"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent-repositories.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        assert!(RecentRepositories::load_from(&path).is_empty());
    }

    #[test]
    fn test_default_max_commits_field() {
        let toml = r#"
            [[repository]]
            url = "https://github.com/o/r"
            last_used = "2024-05-01T10:00:00Z"
        "#;
        let repos: RecentRepositories = toml::from_str(toml).unwrap();
        assert_eq!(repos.entries[0].max_commits, 20);
    }
}
