//! Client for the gitdocify documentation backend
//!
//! This crate provides trait-based clients for the three remote collaborators
//! of the viewer:
//!
//! ```text
//! ┌──────────────────────┐  ┌──────────────────────┐  ┌──────────────────────┐
//! │   DocsBackend        │  │   RepoMetaProvider   │  │   PushChannel        │
//! │  - generate_docs()   │  │  - fetch_description │  │  - connect(repo_url) │
//! └──────────────────────┘  └──────────────────────┘  └──────────────────────┘
//!            │                         │                         │
//!            ▼                         ▼                         ▼
//! ┌──────────────────────┐  ┌──────────────────────┐  ┌──────────────────────┐
//! │ ReqwestDocsClient    │  │ OctocrabMetaClient   │  │ WebSocketChannel     │
//! │ POST /generate_docs  │  │ GET /repos/{o}/{r}   │  │ ws://…/live_updates  │
//! └──────────────────────┘  └──────────────────────┘  └──────────────────────┘
//! ```
//!
//! The traits exist so the application can be driven by in-memory fakes in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use docify_client::{DocsBackend, ReqwestDocsClient};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let backend = ReqwestDocsClient::new("http://127.0.0.1:8000", Duration::from_secs(300))?;
//! let commits = backend
//!     .generate_docs("https://github.com/octocat/Hello-World", 20)
//!     .await?;
//! println!("{} commits documented", commits.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod octocrab_client;
pub mod push_channel;
pub mod repo_url;
pub mod types;

pub use client::{DocsBackend, RepoMetaProvider};
pub use http_client::ReqwestDocsClient;
pub use octocrab_client::OctocrabMetaClient;
pub use push_channel::{ConnectionState, PushChannel, PushSubscription, WebSocketChannel};
pub use repo_url::{parse_github_url, project_title};
pub use types::{
    Commit, FileDiff, GenerateDocsRequest, GenerateDocsResponse, LiveUpdateMessage, ProjectMeta,
    NEW_COMMIT_MESSAGE, NO_DESCRIPTION, NO_NOTES,
};
