//! Plain-text rendering in the canonical `[LEVEL] CODE: what` form.
//!
//! Colors are purely decorative: the plain output is always fully meaningful
//! without them, and the level is always spelled out as text.

use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;
use crate::message::{A11yMessage, Level};

use super::{OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY; `NO_COLOR` disables, `FORCE_COLOR`
    /// forces.
    #[default]
    Auto,
    Always,
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // NO_COLOR takes precedence (https://no-color.org/): any
                // value disables color.
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                // FORCE_COLOR overrides terminal detection.
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                std::io::stdout().is_terminal()
            }
        }
    }

    const fn level_color(level: Level) -> &'static str {
        match level {
            Level::Ok => ansi::GREEN,
            Level::Warn => ansi::YELLOW,
            Level::Error => ansi::RED,
        }
    }

    /// Renders one message in the canonical form:
    ///
    /// ```text
    /// [LEVEL] CODE: what
    ///   at file:line N
    ///   Why: explanation
    ///   Fix: suggestion
    /// ```
    #[must_use]
    pub fn render_message(&self, message: &A11yMessage) -> String {
        let mut out = String::new();

        if self.use_colors {
            let color = Self::level_color(message.level);
            let _ = write!(
                out,
                "{color}{}[{}]{} {}{}{}: {}",
                ansi::BOLD,
                message.level,
                ansi::RESET,
                ansi::CYAN,
                message.code,
                ansi::RESET,
                message.what
            );
        } else {
            let _ = write!(out, "[{}] {}: {}", message.level, message.code, message.what);
        }

        if let Some(location) = &message.location {
            if self.use_colors {
                let _ = write!(out, "\n  {}at {location}{}", ansi::GRAY, ansi::RESET);
            } else {
                let _ = write!(out, "\n  at {location}");
            }
        }
        if let Some(why) = &message.why {
            if self.use_colors {
                let _ = write!(out, "\n  {}Why:{} {why}", ansi::BOLD, ansi::RESET);
            } else {
                let _ = write!(out, "\n  Why: {why}");
            }
        }
        if let Some(fix) = &message.fix {
            if self.use_colors {
                let _ = write!(out, "\n  {}Fix:{} {fix}", ansi::BOLD, ansi::RESET);
            } else {
                let _ = write!(out, "\n  Fix: {fix}");
            }
        }
        out
    }

    fn colorize_summary(&self, summary: &str, messages: &[A11yMessage]) -> String {
        if !self.use_colors {
            return summary.to_string();
        }
        let worst = if messages.iter().any(|m| m.level == Level::Error) {
            ansi::RED
        } else if messages.iter().any(|m| m.level == Level::Warn) {
            ansi::YELLOW
        } else {
            ansi::GREEN
        };
        format!("{worst}{summary}{}", ansi::RESET)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, messages: &[A11yMessage]) -> Result<String> {
        let mut out = String::new();
        for message in messages {
            out.push_str(&self.render_message(message));
            out.push('\n');
        }
        if !messages.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.colorize_summary(&summary_line(messages), messages));
        out.push('\n');
        Ok(out)
    }
}

/// Deterministic one-line count summary.
#[must_use]
pub fn summary_line(messages: &[A11yMessage]) -> String {
    let ok = messages.iter().filter(|m| m.level == Level::Ok).count();
    let warn = messages.iter().filter(|m| m.level == Level::Warn).count();
    let error = messages.iter().filter(|m| m.level == Level::Error).count();

    let mut parts = Vec::new();
    if ok > 0 {
        parts.push(format!("{ok} passed"));
    }
    if warn > 0 {
        parts.push(format!("{warn} warning(s)"));
    }
    if error > 0 {
        parts.push(format!("{error} error(s)"));
    }
    if parts.is_empty() {
        "No issues found".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
