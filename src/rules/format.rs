//! Formatting rules (FMT0xx).

use crate::message::{A11yMessage, Location, codes};

use super::{LineContext, Rule};

/// FMT001: lines longer than the configured maximum are hard to read under
/// screen magnification.
pub struct LineLength {
    max: usize,
}

impl LineLength {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for LineLength {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn code(&self) -> &'static str {
        codes::LINE_TOO_LONG
    }

    fn description(&self) -> &'static str {
        "Check line length"
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        // Length in characters, trailing whitespace excluded.
        let trimmed = line.trim_end();
        let length = trimmed.chars().count();
        if length <= self.max {
            return Vec::new();
        }

        let excerpt: String = trimmed.chars().take(80).collect();
        vec![
            A11yMessage::warn(
                self.code(),
                &format!("Line {} is {length} characters long", ctx.line),
                "Long lines are difficult to read, especially for users with \
                 cognitive disabilities or those using screen magnification.",
                &format!(
                    "Break the line into multiple lines of {} characters or fewer.",
                    self.max
                ),
                self.name(),
            )
            .with_location(Location::new(ctx.file, ctx.line).with_context(&excerpt))
            .with_metadata("length", length.into()),
        ]
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
