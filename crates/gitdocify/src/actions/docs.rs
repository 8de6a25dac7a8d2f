//! Documentation fetch and export actions

use docify_client::{Commit, ProjectMeta};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum DocsAction {
    /// Fetch documentation for a repository
    Generate { repo_url: String, max_commits: u32 },
    /// Generate again for the current repository
    Refresh,
    /// A generate run finished
    Loaded {
        repo_url: String,
        project: ProjectMeta,
        commits: Vec<Commit>,
    },
    /// A generate run failed; the commit list stays as it was
    Failed { repo_url: String, error: String },
    /// Export the current commit list to PDF
    Export,
    /// The PDF was written
    Exported(PathBuf),
    /// Writing the PDF failed
    ExportFailed(String),
}
