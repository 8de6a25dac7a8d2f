//! Client traits
//!
//! This module defines the interfaces the viewer uses to talk to the
//! documentation backend and to the repository metadata service.
//! Implementations can hit the network directly or be in-memory fakes.

use crate::types::Commit;
use async_trait::async_trait;

/// Documentation backend
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks spawned by the application.
///
/// # Example
///
/// ```rust,ignore
/// use docify_client::{Commit, DocsBackend};
///
/// async fn latest(backend: &dyn DocsBackend, url: &str) -> anyhow::Result<Option<Commit>> {
///     Ok(backend.generate_docs(url, 1).await?.into_iter().next())
/// }
/// ```
#[async_trait]
pub trait DocsBackend: Send + Sync {
    /// Generate documentation for the most recent commits of a repository
    ///
    /// # Arguments
    ///
    /// * `repo_url` - Repository URL (or a path the backend can reach)
    /// * `max_commits` - Upper bound on the number of commits returned
    ///
    /// # Returns
    ///
    /// Documented commits in backend order (newest first in practice).
    async fn generate_docs(&self, repo_url: &str, max_commits: u32)
        -> anyhow::Result<Vec<Commit>>;
}

/// Repository metadata lookup
#[async_trait]
pub trait RepoMetaProvider: Send + Sync {
    /// Fetch the description of a repository
    ///
    /// Returns `Ok(None)` when the repository exists but has no description.
    async fn fetch_description(&self, owner: &str, repo: &str) -> anyhow::Result<Option<String>>;
}
