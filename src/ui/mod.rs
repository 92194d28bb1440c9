//! User interface module - terminal output for the bump workflow.
//!
//! All styling lives in `formatter`; nothing here reads from stdin.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_dry_run, display_error, display_status, display_success,
    display_version_change,
};
