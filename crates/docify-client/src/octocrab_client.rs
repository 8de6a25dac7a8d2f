//! Octocrab-based repository metadata client
//!
//! Direct implementation of the `RepoMetaProvider` trait using the octocrab library.

use crate::client::RepoMetaProvider;
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Repository metadata from the GitHub REST API
#[derive(Debug, Clone)]
pub struct OctocrabMetaClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabMetaClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client for `api_url`, authenticated when a token is available
    ///
    /// Reads `GITHUB_TOKEN`, then `GH_TOKEN`. Without a token the client
    /// makes anonymous requests, which is enough for public repositories.
    pub fn from_env(api_url: &str) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(api_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", api_url))?;

        match std::env::var("GITHUB_TOKEN").or_else(|_| std::env::var("GH_TOKEN")) {
            Ok(token) if !token.trim().is_empty() => {
                debug!("Using GitHub token from environment");
                builder = builder.personal_token(token);
            }
            _ => debug!("No GitHub token found, using anonymous API access"),
        }

        let octocrab = builder.build().context("Failed to build GitHub client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl RepoMetaProvider for OctocrabMetaClient {
    async fn fetch_description(&self, owner: &str, repo: &str) -> anyhow::Result<Option<String>> {
        debug!("Fetching repository metadata for {}/{}", owner, repo);

        let repository = self
            .octocrab
            .repos(owner, repo)
            .get()
            .await
            .with_context(|| format!("Failed to fetch {}/{}", owner, repo))?;

        Ok(repository.description.filter(|d| !d.trim().is_empty()))
    }
}
