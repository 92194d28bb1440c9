//! Pure formatting functions for UI output.
//!
//! Errors and warnings go to stderr, everything else to stdout.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the old and new version side by side.
pub fn format_version_change(previous: &str, next: &str) -> String {
    format!("{} → {}", style(previous).red(), style(next).green().bold())
}

/// Display the version change that was (or would be) written.
pub fn display_version_change(previous: &str, next: &str) {
    println!("\n{}", style("Version:").bold());
    println!("  {}", format_version_change(previous, next));
}

/// Display what a dry run would have written.
///
/// # Arguments
/// * `manifest` - Path of the manifest that was left untouched
/// * `version` - The version that would have been written
pub fn display_dry_run(manifest: &str, version: &str) {
    println!(
        "{} Dry run: {} not written (would set version to {})",
        style("→").yellow(),
        style(manifest).cyan(),
        version
    );
}
