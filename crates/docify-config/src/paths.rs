//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gitdocify/`, `~/.cache/gitdocify/`
//! - macOS: `~/Library/Application Support/gitdocify/`, `~/Library/Caches/gitdocify/`
//! - Windows: `%APPDATA%\gitdocify\`, `%LOCALAPPDATA%\gitdocify\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "gitdocify";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to recent repositories file
pub fn recent_repositories_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("recent-repositories.toml"))
}

/// Directory for log files
///
/// The working directory in debug builds, the cache directory otherwise.
pub fn log_dir() -> Result<PathBuf> {
    if cfg!(debug_assertions) {
        Ok(std::env::current_dir()?)
    } else {
        cache_dir()
    }
}
