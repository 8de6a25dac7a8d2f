//! Configuration and file management for gitdocify
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Recent repositories persistence

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod recent_repositories;

pub use app_config::{clamp_max_commits, AppConfig, MAX_COMMITS, MIN_COMMITS};
pub use config_file::load_config_file;
pub use recent_repositories::{
    load_recent_repositories, save_recent_repositories, RecentRepositories, RecentRepository,
    MAX_RECENT_REPOSITORIES,
};
