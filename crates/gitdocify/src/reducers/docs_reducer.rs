//! Documentation Reducer
//!
//! Tracks the generate request in flight and swaps in its result. A result
//! for a repository other than the one being loaded is stale and dropped.

use crate::actions::DocsAction;
use crate::state::{CommitListState, SessionState};

pub fn reduce(session: &mut SessionState, commit_list: &mut CommitListState, action: &DocsAction) {
    match action {
        DocsAction::Generate {
            repo_url,
            max_commits,
        } => {
            session.loading = Some(repo_url.clone());
            session.max_commits = Some(*max_commits);
        }
        DocsAction::Loaded {
            repo_url,
            project,
            commits,
        } => {
            if session.loading.as_deref() != Some(repo_url.as_str()) {
                log::debug!("Dropping stale documentation for {}", repo_url);
                return;
            }
            session.loading = None;
            session.repo_url = Some(repo_url.clone());
            commit_list.replace(project.clone(), commits.clone());
        }
        DocsAction::Failed { repo_url, .. } => {
            if session.loading.as_deref() == Some(repo_url.as_str()) {
                session.loading = None;
            }
        }
        DocsAction::Export => session.exporting = true,
        DocsAction::Exported(path) => {
            session.exporting = false;
            session.last_export = Some(path.clone());
        }
        DocsAction::ExportFailed(_) => session.exporting = false,
        // Turned into Generate by the docs middleware
        DocsAction::Refresh => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docify_client::{Commit, ProjectMeta};
    use pretty_assertions::assert_eq;

    const URL: &str = "https://github.com/o/r";

    fn commits(shas: &[&str]) -> Vec<Commit> {
        shas.iter()
            .map(|sha| Commit {
                sha: sha.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn generate(session: &mut SessionState, list: &mut CommitListState, url: &str) {
        reduce(
            session,
            list,
            &DocsAction::Generate {
                repo_url: url.to_string(),
                max_commits: 20,
            },
        );
    }

    #[test]
    fn test_loaded_replaces_list() {
        let mut session = SessionState::default();
        let mut list = CommitListState::default();
        list.replace(ProjectMeta::without_description("old"), commits(&["x"]));

        generate(&mut session, &mut list, URL);
        assert!(session.is_loading());

        reduce(
            &mut session,
            &mut list,
            &DocsAction::Loaded {
                repo_url: URL.to_string(),
                project: ProjectMeta::without_description("r"),
                commits: commits(&["c", "b", "a"]),
            },
        );

        assert!(!session.is_loading());
        assert_eq!(session.repo_url.as_deref(), Some(URL));
        let shas: Vec<_> = list.commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_failure_keeps_list_and_clears_loading() {
        let mut session = SessionState::default();
        let mut list = CommitListState::default();
        list.replace(ProjectMeta::without_description("old"), commits(&["x", "y"]));
        let before = list.clone();

        generate(&mut session, &mut list, URL);
        reduce(
            &mut session,
            &mut list,
            &DocsAction::Failed {
                repo_url: URL.to_string(),
                error: "boom".to_string(),
            },
        );

        assert!(!session.is_loading());
        assert_eq!(list, before);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut session = SessionState::default();
        let mut list = CommitListState::default();

        generate(&mut session, &mut list, "https://github.com/o/first");
        generate(&mut session, &mut list, URL);
        reduce(
            &mut session,
            &mut list,
            &DocsAction::Loaded {
                repo_url: "https://github.com/o/first".to_string(),
                project: ProjectMeta::without_description("first"),
                commits: commits(&["f"]),
            },
        );

        assert!(list.is_empty());
        assert_eq!(session.loading.as_deref(), Some(URL));
    }
}
