//! Peekr CLI application entry point
//!
//! A thin host over the peekr library for checking how files would be
//! presented without a UI.
//!
//! # Usage
//!
//! ```bash
//! # Classify a single file
//! peekr classify photo.heic
//! peekr classify export.ai --thumbnail https://cdn.example/export.png
//!
//! # Route every file in a manifest (JSON array of file descriptors)
//! peekr route files.json
//! peekr route files.json --json
//!
//! # Configuration
//! peekr config path
//! peekr config show
//!
//! # Quiet mode (only output results) and debug logging
//! peekr -q route files.json
//! peekr -v route files.json
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/peekr/config.toml` on Linux) and created with defaults on
//! first run.

use colored::Colorize;
use peekr::{
    PeekrError,
    classify::{FileDescriptor, classify},
    cli::{Cli, Commands, ConfigCommands},
    config::PeekrConfig,
    output,
    routing::{ActionRouter, RoutedAction},
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PeekrError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(PeekrConfig::config_path()?),
    }
}

fn handle_classify(filename: &str, mime: Option<&str>, thumbnail: Option<&str>, quiet: bool) {
    let mut file = FileDescriptor::new(filename, filename, mime.unwrap_or_default(), 0);
    if let Some(url) = thumbnail {
        file = file.with_thumbnail(url);
    }
    let category = classify(&file);

    if quiet {
        println!("{category}");
        return;
    }

    let preview = if category.is_previewable() {
        "previewable".green()
    } else {
        "no in-app preview".dimmed()
    };
    println!(
        "{}: {} ({preview})",
        filename.bold(),
        output::colorize_category(category)
    );
}

#[derive(Serialize)]
struct RoutedEntry<'a> {
    file: &'a FileDescriptor,
    #[serde(flatten)]
    routed: RoutedAction,
}

fn handle_route(config: &PeekrConfig, manifest: &Path, json: bool, quiet: bool) -> Result<()> {
    let contents = fs::read_to_string(manifest)?;
    let files: Vec<FileDescriptor> = serde_json::from_str(&contents)?;
    let router = ActionRouter::new(config.router_config());

    if json {
        let entries: Vec<_> = files
            .iter()
            .map(|file| RoutedEntry {
                file,
                routed: router.route(file),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if files.is_empty() && !quiet {
        println!("{}", "Manifest contains no files".yellow());
        return Ok(());
    }

    let mut attention = 0;
    for file in &files {
        let routed = router.route(file);
        if routed.needs_attention() {
            attention += 1;
        }
        println!("{}", output::routed_file(file, &routed, quiet));
    }

    if !quiet {
        println!(
            "\n{} file(s) routed, {} need attention",
            files.len(),
            attention
        );
    }
    Ok(())
}

fn handle_config(cli: &Cli, command: &ConfigCommands) -> Result<()> {
    let path = config_path(cli)?;
    match command {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Show => {
            let config = PeekrConfig::load_from(&path)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Classify {
            filename,
            mime,
            thumbnail,
        } => {
            if filename.trim().is_empty() {
                return Err(PeekrError::InvalidInput("File name cannot be empty".into()));
            }
            handle_classify(filename, mime.as_deref(), thumbnail.as_deref(), cli.quiet);
            Ok(())
        }
        Commands::Route { manifest, json } => {
            let config = PeekrConfig::load_from(&config_path(cli)?)?;
            handle_route(&config, manifest, *json, cli.quiet)
        }
        Commands::Config { command } => handle_config(cli, command),
    }
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
