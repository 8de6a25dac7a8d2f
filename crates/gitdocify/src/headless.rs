//! Headless export: generate and write the PDF without the UI

use crate::orchestrator::{FetchOrchestrator, GenerateError};
use anyhow::Context;
use docify_pdf::export_commits;
use std::path::PathBuf;

/// Document `repo_url` and write the PDF to `output`, returning the written path
pub async fn export(
    orchestrator: &FetchOrchestrator,
    repo_url: &str,
    max_commits: u32,
    output: PathBuf,
) -> anyhow::Result<PathBuf> {
    let docs = orchestrator
        .generate(repo_url, max_commits)
        .await
        .map_err(|e| match e {
            GenerateError::EmptyRepoUrl => anyhow::anyhow!(e),
            other => anyhow::anyhow!("{}\nCaused by: {}", other, other.detail()),
        })?;

    log::info!(
        "Exporting {} commits of {} to {}",
        docs.commits.len(),
        docs.project.title,
        output.display()
    );

    let written = tokio::task::spawn_blocking(move || {
        export_commits(&docs.project, &docs.commits, &output)
    })
    .await
    .context("PDF export task failed")??;

    Ok(written)
}
