//! Command-line interface definitions and parsing
//!
//! A small host surface over the library using the `clap` crate. It
//! classifies single files, routes a JSON manifest of file descriptors the
//! way the viewer would, and inspects the configuration.
//!
//! # Commands
//!
//! - **classify**: Category and previewability of one file
//! - **route**: Action decision and security advisories for each file in a
//!   manifest
//! - **config**: Print the config path or the effective configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use peekr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["peekr", "-v", "classify", "logo.svg", "--thumbnail", "https://cdn.test/logo.png"]);
//! assert_eq!(cli.log_filter(), "debug");
//! assert!(matches!(cli.command, Commands::Classify { .. }));
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the path of the config file
    Path,
    /// Print the effective configuration as TOML
    Show,
}

/// Top-level CLI
#[derive(Parser, Debug)]
#[command(name = "peekr")]
#[command(about = "Decide how files are previewed, shared or downloaded", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print results
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Classify a file by name and MIME type
    #[command(visible_alias = "c")]
    Classify {
        /// File name, used for the extension fallback
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// Declared MIME type
        #[arg(short = 'm', long = "mime", value_name = "TYPE")]
        mime: Option<String>,

        /// Thumbnail URL (lets vector files preview)
        #[arg(short = 't', long = "thumbnail", value_name = "URL")]
        thumbnail: Option<String>,
    },

    /// Route every file in a JSON manifest
    #[command(visible_alias = "r")]
    Route {
        /// JSON array of file descriptors
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter directive implied by `--quiet` and `--verbose`
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let cli = Cli::parse_from(["peekr", "classify", "scan.pdf", "-m", "application/pdf"]);
        assert_eq!(
            cli.command,
            Commands::Classify {
                filename: "scan.pdf".into(),
                mime: Some("application/pdf".into()),
                thumbnail: None,
            }
        );
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_parse_route_with_global_flags() {
        let cli = Cli::parse_from(["peekr", "r", "files.json", "--json", "-q", "--config", "/tmp/p.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(
            cli.command,
            Commands::Route {
                manifest: PathBuf::from("files.json"),
                json: true,
            }
        );
        assert_eq!(cli.log_filter(), "error");
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["peekr", "-vv", "config", "show"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_filter(), "trace");
        assert_eq!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Show
            }
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
