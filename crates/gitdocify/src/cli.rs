//! Command line interface

use clap::{Parser, Subcommand};
use docify_config::AppConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gitdocify")]
#[command(about = "Browse and export AI generated documentation of a repository's commits")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository to document right after start
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Number of commits to document (1-50)
    #[arg(long, value_name = "N")]
    pub max_commits: Option<u32>,

    /// Base URL of the documentation backend
    #[arg(long, value_name = "URL", env = "GITDOCIFY_BACKEND_URL", global = true)]
    pub backend: Option<String>,

    /// WebSocket endpoint for live commit notifications
    #[arg(long, value_name = "URL", env = "GITDOCIFY_LIVE_UPDATES_URL", global = true)]
    pub live_updates: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate documentation and write it to a PDF without starting the UI
    Export {
        /// Repository to document
        repo_url: String,

        /// Number of commits to document (1-50)
        #[arg(long, value_name = "N")]
        max_commits: Option<u32>,

        /// PDF file to write; defaults to the configured output path
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Flags take precedence over the config file
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(backend) = &self.backend {
            config.backend_url = backend.clone();
        }
        if let Some(live_updates) = &self.live_updates {
            config.live_updates_url = live_updates.clone();
        }
        let max_commits = match &self.command {
            Some(Command::Export { max_commits, .. }) => max_commits.or(self.max_commits),
            None => self.max_commits,
        };
        if let Some(max_commits) = max_commits {
            config.default_max_commits = max_commits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gitdocify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--repo",
            "https://github.com/o/r",
            "--max-commits",
            "80",
            "--backend",
            "http://docs.internal:9000",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(cli.repo.as_deref(), Some("https://github.com/o/r"));
        assert_eq!(config.backend_url, "http://docs.internal:9000");
        assert_eq!(config.max_commits(), 50);
        assert_eq!(config.live_updates_url, AppConfig::default().live_updates_url);
    }

    #[test]
    fn test_export_subcommand() {
        let cli = parse(&[
            "export",
            "https://github.com/o/r",
            "--max-commits",
            "3",
            "-o",
            "out/docs.pdf",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        match cli.command {
            Some(Command::Export {
                repo_url, output, ..
            }) => {
                assert_eq!(repo_url, "https://github.com/o/r");
                assert_eq!(output, Some(PathBuf::from("out/docs.pdf")));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(config.max_commits(), 3);
    }

    #[test]
    fn test_export_requires_repository() {
        assert!(Cli::try_parse_from(["gitdocify", "export"]).is_err());
    }
}
