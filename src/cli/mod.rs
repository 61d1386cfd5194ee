//! CLI argument parsing for amur.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::generator::ProjectFlags;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Amur: scaffold Koa + Mongoose + GraphQL starter applications.
#[derive(Parser, Debug)]
#[command(name = "amur")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for amur.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new application.
    ///
    /// Creates a directory named after the project containing the source
    /// files, configuration and a package.json, then installs dependencies.
    App(AppArgs),

    /// List the optional feature groups and the files they add.
    Features,
}

/// Arguments for the `app` command.
#[derive(Parser, Debug)]
pub struct AppArgs {
    /// Project name, used verbatim as directory name and package name.
    pub name: String,

    /// Add Jest configuration, a model test environment and test settings.
    #[arg(long)]
    pub test: bool,

    /// Initialize a git repository in the generated project.
    #[arg(long)]
    pub git_init: bool,

    /// Do not install dependencies after generation.
    #[arg(long)]
    pub skip_install: bool,

    /// Directory the project directory is created in.
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Print the files that would be generated without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: ./amur.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl AppArgs {
    /// The closed flag set handed to the generator.
    pub fn flags(&self) -> ProjectFlags {
        ProjectFlags {
            test: self.test,
            git_init: self.git_init,
            skip_install: self.skip_install,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_app_minimal() {
        let cli = Cli::try_parse_from(["amur", "app", "brand-new-app"]).unwrap();
        if let Command::App(args) = cli.command {
            assert_eq!(args.name, "brand-new-app");
            assert_eq!(args.flags(), ProjectFlags::default());
            assert_eq!(args.dest, PathBuf::from("."));
            assert!(!args.dry_run);
            assert!(args.config.is_none());
        } else {
            panic!("Expected App command");
        }
    }

    #[test]
    fn parse_app_full() {
        let cli = Cli::try_parse_from([
            "amur",
            "app",
            "brand-new-app-with-tests",
            "--test",
            "--git-init",
            "--skip-install",
            "--dest",
            "/tmp/projects",
            "--dry-run",
            "--config",
            "amur.yaml",
        ])
        .unwrap();
        if let Command::App(args) = cli.command {
            assert_eq!(args.name, "brand-new-app-with-tests");
            assert_eq!(
                args.flags(),
                ProjectFlags {
                    test: true,
                    git_init: true,
                    skip_install: true,
                }
            );
            assert_eq!(args.dest, PathBuf::from("/tmp/projects"));
            assert!(args.dry_run);
            assert_eq!(args.config, Some(PathBuf::from("amur.yaml")));
        } else {
            panic!("Expected App command");
        }
    }

    #[test]
    fn parse_app_requires_name() {
        assert!(Cli::try_parse_from(["amur", "app"]).is_err());
    }

    #[test]
    fn parse_features() {
        let cli = Cli::try_parse_from(["amur", "features"]).unwrap();
        assert!(matches!(cli.command, Command::Features));
    }
}
