//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static PIN: Emoji<'_, '_> = Emoji("📍 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "  {} {}",
        PACKAGE,
        style("Claude Code Extensions Manager").cyan().bold()
    );
    println!("  {}", style(format!("v{}", version)).dim());
    println!("  {}", style("─".repeat(40)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!(
        "  {} {}",
        style("!").yellow().bold(),
        style(message).yellow()
    );
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("  {} {}", style("✗").red().bold(), style(message).red());
}

/// Print a dim hint line, e.g. a follow-up command suggestion
pub fn print_hint(message: &str) {
    println!("  {}", style(message).dim());
}

/// Print the location a file was installed to or removed from
pub fn print_location(path: &Path) {
    println!("  {} {}", PIN, style(path.display()).dim());
}

/// Print the card shown before a batch install
pub fn print_install_card(count: usize, kind_plural: &str, level: &str, claude_dir: &Path) {
    println!();
    println!(
        "  {} Installing {} {} to {} level",
        PACKAGE,
        style(count).yellow().bold(),
        kind_plural,
        style(level).cyan()
    );
    println!(
        "  {} Target: {}",
        FOLDER,
        style(truncate_path(claude_dir, 60)).dim()
    );
    println!();
}

// Helper functions

pub fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
