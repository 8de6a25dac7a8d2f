//! Application configuration
//!
//! Configuration loaded from `.gitdocify.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Lower and upper bound for the number of commits requested per batch
pub const MIN_COMMITS: u32 = 1;
pub const MAX_COMMITS: u32 = 50;

/// Application configuration loaded from `.gitdocify.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the documentation backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// WebSocket endpoint for live commit notifications
    #[serde(default = "default_live_updates_url")]
    pub live_updates_url: String,

    /// GitHub REST API used for repository descriptions
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Commit limit pre-filled in the repository input
    #[serde(default = "default_max_commits")]
    pub default_max_commits: u32,

    /// Maximum number of enrichment operations in flight
    #[serde(default = "default_enrich_concurrency")]
    pub enrich_concurrency: usize,

    /// Timeout for a single backend request in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// File name of the exported PDF
    #[serde(default = "default_pdf_file_name")]
    pub pdf_file_name: String,

    /// Directory the PDF is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_live_updates_url() -> String {
    "ws://127.0.0.1:8000/live_updates".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_max_commits() -> u32 {
    20
}

fn default_enrich_concurrency() -> usize {
    5
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_pdf_file_name() -> String {
    "gitdocify_documentation.pdf".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            live_updates_url: default_live_updates_url(),
            github_api_url: default_github_api_url(),
            default_max_commits: default_max_commits(),
            enrich_concurrency: default_enrich_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            pdf_file_name: default_pdf_file_name(),
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Default commit limit, clamped to the accepted range
    pub fn max_commits(&self) -> u32 {
        clamp_max_commits(self.default_max_commits)
    }

    /// Enrichment concurrency, never zero
    pub fn enrich_limit(&self) -> usize {
        self.enrich_concurrency.max(1)
    }

    /// Full path of the exported PDF
    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir.join(&self.pdf_file_name)
    }
}

/// Clamp a requested commit count to `MIN_COMMITS..=MAX_COMMITS`
pub fn clamp_max_commits(value: u32) -> u32 {
    value.clamp(MIN_COMMITS, MAX_COMMITS)
}
