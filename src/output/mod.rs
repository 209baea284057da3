mod error_output;
mod json;
mod markdown;
mod text;

pub use error_output::{ErrorOutput, print_error, print_error_full};
pub use json::JsonFormatter;
pub use markdown::{MarkdownFormatter, render_report_md};
pub use text::{ColorMode, TextFormatter, summary_line};

use crate::error::Result;
use crate::message::A11yMessage;

/// Trait for rendering a finding sequence into an output format.
pub trait OutputFormatter {
    /// Format the messages into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, messages: &[A11yMessage]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// ANSI codes shared by the terminal formatters.
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
