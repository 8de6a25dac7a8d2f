//! Document export entry point

use crate::document::layout_document;
use crate::error::ExportError;
use crate::render::render_pdf;
use crate::style::PageGeometry;
use docify_client::{Commit, ProjectMeta};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Export `commits` to a PDF file at `path`
///
/// Refuses an empty commit list without touching the file system. Missing
/// parent directories are created.
pub fn export_commits(
    project: &ProjectMeta,
    commits: &[Commit],
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if commits.is_empty() {
        return Err(ExportError::EmptyCommitList);
    }

    let geometry = PageGeometry::a4();
    let pages = layout_document(project, commits, geometry);
    log::debug!(
        "Laid out {} commits of {} on {} pages",
        commits.len(),
        project.title,
        pages.len()
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    render_pdf(&pages, &geometry, &project.title, file)?;

    log::info!("Wrote {} ({} pages)", path.display(), pages.len());
    Ok(path.to_path_buf())
}
