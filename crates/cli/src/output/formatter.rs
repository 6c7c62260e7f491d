//! Output formatter for human-readable and JSON output
//!
//! Ensures consistent output formatting across all commands. JSON output is
//! one compact object per line so that listings can be streamed.

use std::fmt::Display;

use serde::Serialize;

use super::{Message, OutputConfig, Role, Theme};

/// Prefix for fatal errors in human-readable mode
const ERROR_PREFIX: &str = "mc: <ERROR>";

/// JSON shape of a fatal error
#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    status: &'static str,
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

/// Formatter for CLI output
///
/// Handles both human-readable and JSON output formats based on configuration.
/// When JSON mode is enabled, all output is strict JSON without colors.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
    theme: Theme,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        let colors = !config.no_color && !config.json && console::colors_enabled();
        Self {
            config,
            theme: Theme::new(colors),
        }
    }

    /// Check if JSON output mode is enabled
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        self.theme.is_enabled()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Format a message for the current mode without printing it
    pub fn format<M: Message>(&self, message: &M) -> Result<String, serde_json::Error> {
        if self.config.json {
            serde_json::to_string(message)
        } else {
            Ok(message.render(&self.theme))
        }
    }

    /// Print a message to stdout (respects quiet mode)
    pub fn print<M: Message>(&self, message: &M) {
        if self.config.quiet {
            return;
        }

        match self.format(message) {
            Ok(line) => println!("{line}"),
            Err(e) => self.error("Unable to marshal into JSON.", Some(&e)),
        }
    }

    /// Format a fatal error for the current mode
    pub fn format_error(&self, message: &str, cause: Option<&dyn Display>) -> String {
        if self.config.json {
            let output = ErrorOutput {
                status: "error",
                error: ErrorDetail {
                    message,
                    cause: cause.map(|c| c.to_string()),
                },
            };
            return serde_json::to_string(&output).unwrap_or_else(|_| message.to_string());
        }

        let prefix = self.theme.paint(Role::Error, ERROR_PREFIX);
        match cause {
            Some(cause) => format!("{prefix} {message} {cause}"),
            None => format!("{prefix} {message}"),
        }
    }

    /// Print a fatal error to stderr
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str, cause: Option<&dyn Display>) {
        eprintln!("{}", self.format_error(message, cause));
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}
