//! Output formatting utilities
//!
//! This module provides formatters for CLI output in both human-readable
//! and JSON formats, and the color theme used for human-readable output.

mod formatter;
mod theme;

use serde::Serialize;

pub use formatter::Formatter;
pub use theme::{Role, Theme};

/// Output configuration derived from CLI flags
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

/// A command result that can be printed in either output mode
pub trait Message: Serialize {
    /// Human-readable rendering
    fn render(&self, theme: &Theme) -> String;
}
