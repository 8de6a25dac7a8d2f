//! HTTP client for the documentation backend
//!
//! Direct implementation of the `DocsBackend` trait using reqwest.

use crate::client::DocsBackend;
use crate::types::{Commit, GenerateDocsRequest, GenerateDocsResponse};
use anyhow::{bail, Context};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// Backend client speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct ReqwestDocsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ReqwestDocsClient {
    /// Create a client for the backend at `base_url`
    ///
    /// `timeout` bounds each request; documentation generation clones the
    /// repository and calls an AI model, so it should be generous.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The backend base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DocsBackend for ReqwestDocsClient {
    async fn generate_docs(
        &self,
        repo_url: &str,
        max_commits: u32,
    ) -> anyhow::Result<Vec<Commit>> {
        let url = format!("{}/generate_docs", self.base_url);
        debug!("POST {} repo={} max_commits={}", url, repo_url, max_commits);

        let response = self
            .http_client
            .post(&url)
            .json(&GenerateDocsRequest {
                repo_url,
                max_commits,
            })
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Backend returned {}: {}", status, error_detail(&body));
        }

        let body: GenerateDocsResponse = response
            .json()
            .await
            .context("Invalid generate_docs response")?;

        debug!("Backend documented {} commits for {}", body.commits.len(), repo_url);
        Ok(body.commits)
    }
}

/// Extract a readable error from a backend error body
///
/// The backend reports failures as `{"detail": "..."}`; anything else is
/// returned trimmed.
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

    match detail {
        Some(detail) => detail,
        None if body.trim().is_empty() => "no details".to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_json() {
        assert_eq!(
            error_detail(r#"{"detail": "Repository not found"}"#),
            "Repository not found"
        );
    }

    #[test]
    fn test_error_detail_plain_text() {
        assert_eq!(error_detail("  Internal Server Error \n"), "Internal Server Error");
    }

    #[test]
    fn test_error_detail_empty() {
        assert_eq!(error_detail(""), "no details");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ReqwestDocsClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
