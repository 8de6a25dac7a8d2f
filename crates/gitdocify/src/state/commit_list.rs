//! Commit List State
//!
//! The documented commits plus what the user has opened. Any number of
//! commits can be expanded at once (keyed by sha), and each file of an
//! expanded commit opens independently. The cursor walks the visible
//! headers: commits, and the files of expanded commits.

use docify_client::{Commit, ProjectMeta};
use std::collections::HashSet;

/// A row the cursor can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    /// Commit header, by index into the list
    Commit(usize),
    /// File header: commit index, file index
    File(usize, usize),
}

/// Identity of the row under the cursor, stable across list changes
#[derive(Debug, Clone, PartialEq, Eq)]
struct Anchor {
    sha: String,
    file: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitListState {
    pub project: Option<ProjectMeta>,
    /// Insertion ordered; live updates are prepended
    pub commits: Vec<Commit>,
    /// Index into [`CommitListState::targets`]
    pub cursor: usize,
    pub expanded_commits: HashSet<String>,
    pub expanded_files: HashSet<(String, usize)>,
}

impl CommitListState {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn is_commit_expanded(&self, sha: &str) -> bool {
        self.expanded_commits.contains(sha)
    }

    pub fn is_file_expanded(&self, sha: &str, file: usize) -> bool {
        self.expanded_files.contains(&(sha.to_string(), file))
    }

    /// Visible rows in display order
    pub fn targets(&self) -> Vec<ListTarget> {
        let mut targets = Vec::with_capacity(self.commits.len());
        for (i, commit) in self.commits.iter().enumerate() {
            targets.push(ListTarget::Commit(i));
            if self.is_commit_expanded(&commit.sha) {
                targets.extend((0..commit.files.len()).map(|j| ListTarget::File(i, j)));
            }
        }
        targets
    }

    pub fn selected(&self) -> Option<ListTarget> {
        self.targets().get(self.cursor).copied()
    }

    /// Replace the whole list; expansion and cursor start over
    pub fn replace(&mut self, project: ProjectMeta, commits: Vec<Commit>) {
        self.project = Some(project);
        self.commits = commits;
        self.cursor = 0;
        self.expanded_commits.clear();
        self.expanded_files.clear();
    }

    /// Put `commit` at index 0
    ///
    /// A commit with the same sha is replaced, so the list only grows for
    /// new shas. The cursor stays on the row it was on.
    pub fn insert_front(&mut self, commit: Commit) {
        let anchor = self.anchor();

        if let Some(existing) = self.commits.iter().position(|c| c.sha == commit.sha) {
            self.commits.remove(existing);
            let sha = commit.sha.clone();
            let files = commit.files.len();
            self.expanded_files.retain(|(s, j)| *s != sha || *j < files);
        }
        self.commits.insert(0, commit);

        self.restore(anchor);
    }

    pub fn move_next(&mut self) {
        let len = self.targets().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.targets().len().saturating_sub(1);
    }

    /// Expand or collapse the row under the cursor
    pub fn toggle(&mut self) {
        match self.selected() {
            Some(ListTarget::Commit(i)) => {
                let sha = self.commits[i].sha.clone();
                if !self.expanded_commits.remove(&sha) {
                    self.expanded_commits.insert(sha);
                }
            }
            Some(ListTarget::File(i, j)) => {
                let key = (self.commits[i].sha.clone(), j);
                if !self.expanded_files.remove(&key) {
                    self.expanded_files.insert(key);
                }
            }
            None => {}
        }
    }

    pub fn expand_all(&mut self) {
        let anchor = self.anchor();
        for commit in &self.commits {
            self.expanded_commits.insert(commit.sha.clone());
            for j in 0..commit.files.len() {
                self.expanded_files.insert((commit.sha.clone(), j));
            }
        }
        self.restore(anchor);
    }

    pub fn collapse_all(&mut self) {
        let anchor = self.anchor();
        self.expanded_commits.clear();
        self.expanded_files.clear();
        self.restore(anchor);
    }

    fn anchor(&self) -> Option<Anchor> {
        match self.selected()? {
            ListTarget::Commit(i) => Some(Anchor {
                sha: self.commits[i].sha.clone(),
                file: None,
            }),
            ListTarget::File(i, j) => Some(Anchor {
                sha: self.commits[i].sha.clone(),
                file: Some(j),
            }),
        }
    }

    /// Move the cursor back onto `anchor`, or its commit when the file row
    /// is gone, or clamp it into range
    fn restore(&mut self, anchor: Option<Anchor>) {
        let targets = self.targets();
        let found = anchor.and_then(|anchor| {
            let matches = |target: &ListTarget, file: Option<usize>| {
                let (i, j) = match *target {
                    ListTarget::Commit(i) => (i, None),
                    ListTarget::File(i, j) => (i, Some(j)),
                };
                self.commits[i].sha == anchor.sha && j == file
            };
            targets
                .iter()
                .position(|t| matches(t, anchor.file))
                .or_else(|| targets.iter().position(|t| matches(t, None)))
        });

        self.cursor = match found {
            Some(index) => index,
            None => self.cursor.min(targets.len().saturating_sub(1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docify_client::FileDiff;
    use pretty_assertions::assert_eq;

    fn commit(sha: &str, files: usize) -> Commit {
        Commit {
            sha: sha.to_string(),
            files: (0..files)
                .map(|j| FileDiff {
                    file: format!("{}-{}.rs", sha, j),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn list(commits: Vec<Commit>) -> CommitListState {
        let mut state = CommitListState::default();
        state.replace(ProjectMeta::without_description("demo"), commits);
        state
    }

    fn shas(state: &CommitListState) -> Vec<&str> {
        state.commits.iter().map(|c| c.sha.as_str()).collect()
    }

    #[test]
    fn test_collapsed_list_shows_commits_only() {
        let state = list(vec![commit("a", 2), commit("b", 1)]);
        assert_eq!(
            state.targets(),
            vec![ListTarget::Commit(0), ListTarget::Commit(1)]
        );
    }

    #[test]
    fn test_several_commits_expand_independently() {
        let mut state = list(vec![commit("a", 2), commit("b", 1)]);
        state.toggle();
        state.move_to_bottom();
        state.toggle();

        assert!(state.is_commit_expanded("a"));
        assert!(state.is_commit_expanded("b"));
        assert_eq!(
            state.targets(),
            vec![
                ListTarget::Commit(0),
                ListTarget::File(0, 0),
                ListTarget::File(0, 1),
                ListTarget::Commit(1),
                ListTarget::File(1, 0),
            ]
        );
    }

    #[test]
    fn test_file_toggles_inside_expanded_commit() {
        let mut state = list(vec![commit("a", 2)]);
        state.toggle();
        state.move_next();
        state.move_next();
        state.toggle();

        assert!(state.is_file_expanded("a", 1));
        assert!(!state.is_file_expanded("a", 0));

        state.toggle();
        assert!(!state.is_file_expanded("a", 1));
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut state = list(vec![commit("a", 0), commit("b", 0)]);
        state.move_previous();
        assert_eq!(state.cursor, 0);
        state.move_next();
        state.move_next();
        state.move_next();
        assert_eq!(state.cursor, 1);

        let mut empty = CommitListState::default();
        empty.move_next();
        empty.move_to_bottom();
        assert_eq!(empty.cursor, 0);
        assert_eq!(empty.selected(), None);
        empty.toggle();
    }

    #[test]
    fn test_insert_front_shifts_existing_commits() {
        let mut state = list(vec![commit("b", 0), commit("a", 0)]);
        let before = state.commits.clone();

        state.insert_front(commit("c", 0));

        assert_eq!(state.commits.len(), before.len() + 1);
        assert_eq!(state.commits[0].sha, "c");
        assert_eq!(&state.commits[1..], &before[..]);
    }

    #[test]
    fn test_insert_front_replaces_duplicate_sha() {
        let mut state = list(vec![commit("b", 0), commit("a", 0)]);
        let mut fresh = commit("a", 0);
        fresh.summary = "regenerated".to_string();

        state.insert_front(fresh);

        assert_eq!(shas(&state), vec!["a", "b"]);
        assert_eq!(state.commits[0].summary, "regenerated");
    }

    #[test]
    fn test_insert_front_keeps_cursor_on_same_row() {
        let mut state = list(vec![commit("b", 2), commit("a", 1)]);
        state.toggle();
        state.move_next();
        state.move_next();
        assert_eq!(state.selected(), Some(ListTarget::File(0, 1)));

        state.insert_front(commit("c", 0));

        assert_eq!(state.selected(), Some(ListTarget::File(1, 1)));
        assert!(state.is_commit_expanded("b"));
    }

    #[test]
    fn test_collapse_all_moves_cursor_to_owning_commit() {
        let mut state = list(vec![commit("a", 1), commit("b", 3)]);
        state.expand_all();
        assert_eq!(state.targets().len(), 6);
        assert!(state.is_file_expanded("b", 2));

        state.move_to_bottom();
        assert_eq!(state.selected(), Some(ListTarget::File(1, 2)));

        state.collapse_all();
        assert_eq!(state.selected(), Some(ListTarget::Commit(1)));
        assert!(state.expanded_files.is_empty());
    }

    #[test]
    fn test_replace_resets_view() {
        let mut state = list(vec![commit("a", 1)]);
        state.expand_all();
        state.move_to_bottom();

        state.replace(ProjectMeta::without_description("other"), vec![commit("z", 0)]);

        assert_eq!(state.cursor, 0);
        assert!(state.expanded_commits.is_empty());
        assert_eq!(shas(&state), vec!["z"]);
    }
}
