//! Repository Input Form State

use docify_config::{clamp_max_commits, RecentRepositories, MAX_COMMITS};

/// Longest commit limit that can be typed
const MAX_COMMITS_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoInputField {
    #[default]
    Url,
    MaxCommits,
}

impl RepoInputField {
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::MaxCommits,
            Self::MaxCommits => Self::Url,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: previous and next coincide
        self.next()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepoInputState {
    pub url: String,
    pub max_commits: String,
    pub focused_field: RepoInputField,
    pub recent: RecentRepositories,
    /// Entry of `recent` shown in the form, if any
    pub history_index: Option<usize>,
}

impl RepoInputState {
    /// Fill the form with a repository and commit limit
    pub fn fill(&mut self, url: &str, max_commits: u32) {
        self.url = url.to_string();
        self.max_commits = max_commits.to_string();
        self.focused_field = RepoInputField::Url;
    }

    pub fn push_char(&mut self, c: char) {
        match self.focused_field {
            RepoInputField::Url => {
                if !c.is_control() {
                    self.url.push(c);
                }
            }
            RepoInputField::MaxCommits => {
                if c.is_ascii_digit() && self.max_commits.len() < MAX_COMMITS_DIGITS {
                    self.max_commits.push(c);
                }
            }
        }
        self.history_index = None;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
        self.history_index = None;
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
        self.history_index = None;
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focused_field {
            RepoInputField::Url => &mut self.url,
            RepoInputField::MaxCommits => &mut self.max_commits,
        }
    }

    /// Show the next older recent repository
    pub fn history_older(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let last = self.recent.len() - 1;
        let index = match self.history_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.show_history(index);
    }

    /// Show the next newer recent repository; past the newest the form keeps its text
    pub fn history_newer(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => self.history_index = None,
            Some(i) => self.show_history(i - 1),
        }
    }

    fn show_history(&mut self, index: usize) {
        let Some(entry) = self.recent.get(index) else {
            return;
        };
        self.url = entry.url.clone();
        self.max_commits = entry.max_commits.to_string();
        self.history_index = Some(index);
    }

    /// Commit limit to request; unparseable or empty input yields `default`
    pub fn max_commits_or(&self, default: u32) -> u32 {
        match self.max_commits.trim().parse::<u32>() {
            Ok(value) => clamp_max_commits(value),
            Err(_) => clamp_max_commits(default),
        }
    }

    /// Shown next to the commit limit field
    pub fn max_commits_hint() -> String {
        format!("1-{}", MAX_COMMITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docify_config::RecentRepository;
    use pretty_assertions::assert_eq;

    fn with_history(urls: &[&str]) -> RepoInputState {
        let mut recent = RecentRepositories::default();
        for (i, url) in urls.iter().enumerate().rev() {
            recent.push(RecentRepository::new(*url, 10 + i as u32));
        }
        RepoInputState {
            recent,
            ..Default::default()
        }
    }

    #[test]
    fn test_commit_limit_accepts_two_digits_only() {
        let mut form = RepoInputState::default();
        form.focused_field = RepoInputField::MaxCommits;
        for c in "4x25".chars() {
            form.push_char(c);
        }
        assert_eq!(form.max_commits, "42");
    }

    #[test]
    fn test_max_commits_or_clamps() {
        let mut form = RepoInputState::default();
        assert_eq!(form.max_commits_or(20), 20);
        form.max_commits = "0".to_string();
        assert_eq!(form.max_commits_or(20), 1);
        form.max_commits = "99".to_string();
        assert_eq!(form.max_commits_or(20), 50);
    }

    #[test]
    fn test_history_cycles_and_stops_at_ends() {
        let mut form = with_history(&["https://github.com/a/newest", "https://github.com/b/older"]);
        form.history_newer();
        assert_eq!(form.url, "");

        form.history_older();
        assert_eq!(form.url, "https://github.com/a/newest");
        assert_eq!(form.max_commits, "10");
        form.history_older();
        form.history_older();
        assert_eq!(form.url, "https://github.com/b/older");
        assert_eq!(form.history_index, Some(1));

        form.history_newer();
        assert_eq!(form.url, "https://github.com/a/newest");
        form.history_newer();
        assert_eq!(form.history_index, None);
    }

    #[test]
    fn test_typing_leaves_history() {
        let mut form = with_history(&["https://github.com/a/b"]);
        form.history_older();
        form.push_char('x');
        assert_eq!(form.history_index, None);
        assert_eq!(form.url, "https://github.com/a/bx");
    }
}
