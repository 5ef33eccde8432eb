//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with the
//! validation that clap cannot express.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect release models and the artifacts packagers select
#[derive(Parser, Debug)]
#[command(
    name = "release_model",
    version,
    about = "Inspect release models and the artifacts packagers select",
    long_about = "Loads a release.toml, resolves distributions and prints what a packager would publish.

Usage:
  release_model select --packager brew --distribution app
  release_model --select-platform osx select --packager brew --distribution app --candidates
  release_model --config ./release.toml show --full

Exit code 0 = success, 1 = error."
)]
pub struct Args {
    /// Configuration file. Defaults to the nearest release.toml.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Record a dry run on the run context; selection output is unchanged
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Only keep artifacts compatible with this platform (repeatable)
    #[arg(long = "select-platform", value_name = "PLATFORM", global = true)]
    pub select_platforms: Vec<String>,

    /// Drop artifacts compatible with this platform (repeatable)
    #[arg(long = "reject-platform", value_name = "PLATFORM", global = true)]
    pub reject_platforms: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the artifacts a packager selects for a distribution, one per line
    Select {
        /// Packager name, e.g. brew or docker
        #[arg(short, long, value_name = "NAME")]
        packager: String,

        /// Distribution name
        #[arg(short, long, value_name = "NAME")]
        distribution: String,

        /// Include candidates that do not exist on disk
        #[arg(long)]
        candidates: bool,

        /// Print a checksum next to each path (sha1, sha256, sha512)
        #[arg(long, value_name = "ALGORITHM")]
        checksum: Option<String>,
    },

    /// Print the release model as JSON
    Show {
        /// Keep empty and unset values
        #[arg(long)]
        full: bool,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        for platform in self.select_platforms.iter().chain(&self.reject_platforms) {
            if platform.trim().is_empty() {
                return Err("Platform filters cannot be empty".to_string());
            }
        }

        if let Some(conflict) = self
            .select_platforms
            .iter()
            .find(|p| self.reject_platforms.contains(p))
        {
            return Err(format!("Platform {conflict} is both selected and rejected"));
        }

        if let Command::Select {
            packager,
            distribution,
            ..
        } = &self.command
        {
            if packager.trim().is_empty() {
                return Err("Packager cannot be empty".to_string());
            }
            if distribution.trim().is_empty() {
                return Err("Distribution cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

/// Settings derived from command line arguments
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    dry_run: bool,
    selected_platforms: Vec<String>,
    rejected_platforms: Vec<String>,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            dry_run: args.dry_run,
            selected_platforms: args.select_platforms.clone(),
            rejected_platforms: args.reject_platforms.clone(),
        }
    }
}

impl RuntimeConfig {
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn selected_platforms(&self) -> &[String] {
        &self.selected_platforms
    }

    pub fn rejected_platforms(&self) -> &[String] {
        &self.rejected_platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("release_model").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse(&[
            "select",
            "--packager",
            "brew",
            "--distribution",
            "app",
            "--select-platform",
            "osx",
            "--select-platform",
            "linux",
        ]);
        assert_eq!(args.select_platforms, vec!["osx", "linux"]);
        assert!(args.validate().is_ok());
        let runtime = RuntimeConfig::from(&args);
        assert_eq!(runtime.selected_platforms().len(), 2);
        assert!(!runtime.dry_run());
    }

    #[test]
    fn conflicting_platforms() {
        let args = parse(&[
            "--select-platform",
            "osx",
            "--reject-platform",
            "osx",
            "show",
        ]);
        assert!(args.validate().unwrap_err().contains("both selected and rejected"));
    }

    #[test]
    fn select_requires_packager() {
        assert!(
            Args::try_parse_from(["release_model", "select", "--distribution", "app"]).is_err()
        );
    }
}
