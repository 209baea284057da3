//! Structured stderr reporting for the tool's own failures.
//!
//! The linter eats its own dog food: user-visible failures are printed in a
//! what/why/fix shape rather than a bare error string.

use std::io::{IsTerminal, Write};

use crate::error::A11yLintError;

use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // Per https://no-color.org: presence of the variable disables color.
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if std::env::var_os("FORCE_COLOR").is_some() {
            return true;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a failure in what/why/fix form.
    pub fn print(&self, what: &str, why: Option<&str>, fix: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, what, why, fix);
    }

    /// Writes the failure to a writer (split out for testing).
    pub fn write<W: Write>(&self, w: &mut W, what: &str, why: Option<&str>, fix: Option<&str>) {
        // Write failures to stderr cannot be meaningfully recovered from, so
        // they are discarded.
        if self.use_colors {
            let _ = writeln!(w, "{}{}✖ {what}{}", ansi::BOLD, ansi::RED, ansi::RESET);
        } else {
            let _ = writeln!(w, "✖ {what}");
        }
        if let Some(why) = why {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {why}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {why}");
            }
        }
        if let Some(fix) = fix {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {fix}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {fix}");
            }
        }
    }

    /// Explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// What/why/fix text for each failure the user can encounter.
#[must_use]
pub fn explain(error: &A11yLintError) -> (String, Option<String>, Option<String>) {
    let what = error.to_string();
    let (why, fix) = match error {
        A11yLintError::UnknownRule { .. } => (
            "The rule name does not match any registered rule.",
            "Run 'a11y-lint list-rules' to see the available rule names.",
        ),
        A11yLintError::Decode { .. } => (
            "The input contains bytes that are not valid UTF-8 text.",
            "Convert the input to UTF-8 before scanning; no other encodings are supported.",
        ),
        A11yLintError::FileRead { .. } => (
            "The file could not be opened or read.",
            "Check that the path exists and is readable.",
        ),
        A11yLintError::SchemaVersion { .. } => (
            "The message declares a schema version this tool does not support.",
            "Regenerate the messages against schema version 0.1, or upgrade a11y-lint.",
        ),
        A11yLintError::Config(_) | A11yLintError::TomlParse(_) => (
            "The configuration could not be applied.",
            "Fix the configuration file or pass corrected command-line flags.",
        ),
        A11yLintError::Json(_) => (
            "The input is not well-formed JSON.",
            "Validate the JSON syntax before passing it to a11y-lint.",
        ),
        A11yLintError::Io(_) => (
            "An input/output operation failed.",
            "Check file permissions and available disk space, then retry.",
        ),
    };
    (what, Some(why.to_string()), Some(fix.to_string()))
}

/// Prints an error using auto-detected color mode.
pub fn print_error(error: &A11yLintError) {
    let (what, why, fix) = explain(error);
    ErrorOutput::stderr().print(&what, why.as_deref(), fix.as_deref());
}

/// Prints a bare failure with explicit why/fix text.
pub fn print_error_full(what: &str, why: Option<&str>, fix: Option<&str>) {
    ErrorOutput::stderr().print(what, why, fix);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
