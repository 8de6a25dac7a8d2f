//! Fetch orchestrator
//!
//! Turns a repository URL into a project header and a documented commit
//! list: validates the input, looks up the repository description, asks the
//! backend for the latest commits and runs the enrichment pass over them.

use crate::enrich::{enrich_all, CommitEnricher};
use docify_client::{
    parse_github_url, project_title, Commit, DocsBackend, ProjectMeta, RepoMetaProvider,
};
use docify_config::clamp_max_commits;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please enter a GitHub repository URL!")]
    EmptyRepoUrl,

    #[error("Error fetching documentation. Please check backend connection.")]
    Backend(anyhow::Error),

    #[error("Failed to enrich commits")]
    Enrichment(anyhow::Error),
}

impl GenerateError {
    /// Underlying cause, for logs and the status bar
    pub fn detail(&self) -> String {
        match self {
            GenerateError::EmptyRepoUrl => self.to_string(),
            GenerateError::Backend(e) | GenerateError::Enrichment(e) => format!("{:#}", e),
        }
    }
}

/// Result of a successful generate run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocs {
    pub repo_url: String,
    pub project: ProjectMeta,
    pub commits: Vec<Commit>,
}

/// Trimmed repository URL, or [`GenerateError::EmptyRepoUrl`]
pub fn validate_repo_url(url: &str) -> Result<&str, GenerateError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(GenerateError::EmptyRepoUrl);
    }
    Ok(url)
}

pub struct FetchOrchestrator {
    backend: Arc<dyn DocsBackend>,
    meta: Arc<dyn RepoMetaProvider>,
    enricher: Arc<dyn CommitEnricher>,
    enrich_limit: usize,
}

impl FetchOrchestrator {
    pub fn new(
        backend: Arc<dyn DocsBackend>,
        meta: Arc<dyn RepoMetaProvider>,
        enricher: Arc<dyn CommitEnricher>,
        enrich_limit: usize,
    ) -> Self {
        Self {
            backend,
            meta,
            enricher,
            enrich_limit,
        }
    }

    /// Project header for `repo_url`; never fails
    ///
    /// Any metadata problem (unparseable URL, other host, network error,
    /// missing repository) yields the placeholder description.
    pub async fn project_meta(&self, repo_url: &str) -> ProjectMeta {
        let title = project_title(repo_url);

        let Some((owner, repo)) = parse_github_url(repo_url) else {
            log::debug!("No GitHub owner/repo in {}, skipping description", repo_url);
            return ProjectMeta::without_description(title);
        };

        match self.meta.fetch_description(&owner, &repo).await {
            Ok(Some(description)) => ProjectMeta::new(title, description),
            Ok(None) => ProjectMeta::without_description(title),
            Err(e) => {
                log::warn!("Failed to fetch description for {}/{}: {:#}", owner, repo, e);
                ProjectMeta::without_description(title)
            }
        }
    }

    /// Fetch, enrich and return the latest `max_commits` commits
    pub async fn generate(
        &self,
        repo_url: &str,
        max_commits: u32,
    ) -> Result<GeneratedDocs, GenerateError> {
        let repo_url = validate_repo_url(repo_url)?;
        let max_commits = clamp_max_commits(max_commits);
        log::info!("Generating docs for {} ({} commits)", repo_url, max_commits);

        let (project, fetched) = tokio::join!(
            self.project_meta(repo_url),
            self.backend.generate_docs(repo_url, max_commits)
        );
        let fetched = fetched.map_err(GenerateError::Backend)?;

        let commits = enrich_all(fetched, self.enricher.as_ref(), self.enrich_limit)
            .await
            .map_err(GenerateError::Enrichment)?;

        log::info!("Documented {} commits for {}", commits.len(), repo_url);
        Ok(GeneratedDocs {
            repo_url: repo_url.to_string(),
            project,
            commits,
        })
    }

    /// The newest commit of `repo_url`, used for live updates
    pub async fn fetch_latest(&self, repo_url: &str) -> anyhow::Result<Option<Commit>> {
        let commits = self.backend.generate_docs(repo_url, 1).await?;
        Ok(commits.into_iter().next())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory collaborators shared by the tests of several modules

    use super::*;
    use crate::enrich::IdentityEnricher;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    pub fn commit(sha: &str) -> Commit {
        Commit {
            sha: sha.to_string(),
            author: "Ada".to_string(),
            summary: format!("summary {}", sha),
            ..Default::default()
        }
    }

    #[derive(Default)]
    pub struct FakeBackend {
        pub commits: Mutex<Vec<Commit>>,
        pub fail: bool,
        pub delay: Option<Duration>,
        pub calls: AtomicUsize,
        pub requests: Mutex<Vec<(String, u32)>>,
    }

    impl FakeBackend {
        pub fn with_commits(commits: Vec<Commit>) -> Self {
            Self {
                commits: Mutex::new(commits),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocsBackend for FakeBackend {
        async fn generate_docs(
            &self,
            repo_url: &str,
            max_commits: u32,
        ) -> anyhow::Result<Vec<Commit>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests
                .lock()
                .unwrap()
                .push((repo_url.to_string(), max_commits));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                anyhow::bail!("connection refused");
            }
            let commits = self.commits.lock().unwrap();
            Ok(commits.iter().take(max_commits as usize).cloned().collect())
        }
    }

    pub struct FakeMeta(pub anyhow::Result<Option<String>>);

    #[async_trait]
    impl RepoMetaProvider for FakeMeta {
        async fn fetch_description(&self, _owner: &str, _repo: &str) -> anyhow::Result<Option<String>> {
            match &self.0 {
                Ok(description) => Ok(description.clone()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    pub fn orchestrator(backend: Arc<FakeBackend>, meta: FakeMeta) -> FetchOrchestrator {
        FetchOrchestrator::new(backend, Arc::new(meta), Arc::new(IdentityEnricher), 5)
    }
}
