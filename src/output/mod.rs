//! Output formatting for CLI display
//!
//! This module provides utilities for formatting sizes, categories and
//! routing results, both for user-facing warnings and the `peekr` CLI.

use crate::classify::{FileCategory, FileDescriptor};
use crate::routing::{ActionDecision, RoutedAction, SecurityAdvisory};
use byte_unit::{Byte, UnitType};
use colored::Colorize;

/// Human-readable binary size (e.g. `40 MiB`)
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Color a category by whether it can be previewed in-app
#[must_use]
pub fn colorize_category(category: FileCategory) -> String {
    if category.is_previewable() {
        category.as_str().green().to_string()
    } else {
        category.as_str().yellow().to_string()
    }
}

/// One-line summary of a routing decision
#[must_use]
pub fn decision_line(decision: &ActionDecision) -> String {
    match decision {
        ActionDecision::Modal { component, .. } => {
            format!("{} ({component})", "modal".green())
        }
        ActionDecision::Share { .. } => "share".cyan().to_string(),
        ActionDecision::Download { .. } => "download".blue().to_string(),
    }
}

/// Format an advisory as a warning line
#[must_use]
pub fn advisory_line(advisory: &SecurityAdvisory) -> String {
    format!("    {} {advisory}", "security:".red())
}

/// Format a routed file for display
///
/// In quiet mode only `<filename>\t<action>` is printed.
#[must_use]
pub fn routed_file(file: &FileDescriptor, routed: &RoutedAction, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", file.filename, routed.decision.label());
    }

    let mut output = format!(
        "  {} [{}] -> {}",
        file.filename,
        format_size(file.size_bytes),
        decision_line(&routed.decision)
    );
    if let Some(warning) = routed.decision.warning() {
        output.push_str(&format!("\n    {} {warning}", "warning:".yellow()));
    }
    for advisory in &routed.advisories {
        output.push('\n');
        output.push_str(&advisory_line(advisory));
    }
    output
}
