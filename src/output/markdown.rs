//! Markdown report rendering.
//!
//! Output is byte-for-byte stable for identical input: no timestamps, and
//! all tables follow deterministic (insertion or input) order.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::error::Result;
use crate::message::{A11yMessage, Level};

use super::OutputFormatter;

pub struct MarkdownFormatter {
    title: String,
    include_passed: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            include_passed: true,
        }
    }

    #[must_use]
    pub const fn with_passed(mut self, include: bool) -> Self {
        self.include_passed = include;
        self
    }

    const fn level_emoji(level: Level) -> &'static str {
        match level {
            Level::Ok => "✅",
            Level::Warn => "⚠️",
            Level::Error => "❌",
        }
    }

    fn render_message(message: &A11yMessage) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "### {} [{}] {}: {}",
            Self::level_emoji(message.level),
            message.level,
            message.code,
            message.what
        );

        if let Some(location) = &message.location {
            let mut parts: Vec<String> = Vec::new();
            if let Some(file) = &location.file {
                parts.push(format!("`{file}`"));
            }
            if let Some(line) = location.line {
                parts.push(format!("line {line}"));
            }
            if let Some(column) = location.column {
                parts.push(format!("col {column}"));
            }
            if !parts.is_empty() {
                let _ = write!(out, "\n\n**Location:** {}", parts.join(" : "));
            }
            if let Some(context) = &location.context {
                let _ = write!(out, "\n\n```\n{context}\n```");
            }
        }
        if let Some(why) = &message.why {
            let _ = write!(out, "\n\n**Why:** {why}");
        }
        if let Some(fix) = &message.fix {
            let _ = write!(out, "\n\n**Fix:** {fix}");
        }
        if let Some(rule) = &message.rule {
            let _ = write!(out, "\n\n*Rule: `{rule}`*");
        }
        out
    }

    fn rule_counts(messages: &[A11yMessage]) -> IndexMap<String, (usize, usize, usize)> {
        let mut counts: IndexMap<String, (usize, usize, usize)> = IndexMap::new();
        for message in messages {
            let rule = message.rule.clone().unwrap_or_else(|| "unknown".to_string());
            let entry = counts.entry(rule).or_default();
            match message.level {
                Level::Ok => entry.0 += 1,
                Level::Warn => entry.1 += 1,
                Level::Error => entry.2 += 1,
            }
        }
        counts
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, messages: &[A11yMessage]) -> Result<String> {
        Ok(render_report(messages, &self.title, self.include_passed))
    }
}

fn render_report(messages: &[A11yMessage], title: &str, include_passed: bool) -> String {
    let errors: Vec<&A11yMessage> = messages.iter().filter(|m| m.level == Level::Error).collect();
    let warnings: Vec<&A11yMessage> = messages.iter().filter(|m| m.level == Level::Warn).collect();
    let passed: Vec<&A11yMessage> = messages.iter().filter(|m| m.level == Level::Ok).collect();

    let mut lines: Vec<String> = vec![format!("# {title}"), String::new()];

    let status = if errors.is_empty() {
        "✅ Passing"
    } else {
        "❌ Failing"
    };
    lines.extend([
        "## Summary".to_string(),
        String::new(),
        format!("**Status:** {status}"),
        String::new(),
        format!("- Errors: {}", errors.len()),
        format!("- Warnings: {}", warnings.len()),
        format!("- Passed: {}", passed.len()),
        String::new(),
    ]);

    let rule_counts = MarkdownFormatter::rule_counts(messages);
    if !rule_counts.is_empty() {
        lines.extend([
            "## Rules".to_string(),
            String::new(),
            "| Rule | Passed | Warnings | Errors |".to_string(),
            "|------|--------|----------|--------|".to_string(),
        ]);
        for (rule, (ok, warn, error)) in &rule_counts {
            lines.push(format!("| `{rule}` | {ok} | {warn} | {error} |"));
        }
        lines.push(String::new());
    }

    if !errors.is_empty() {
        lines.extend(["## Errors".to_string(), String::new()]);
        for message in &errors {
            lines.push(MarkdownFormatter::render_message(message));
            lines.push(String::new());
        }
    }
    if !warnings.is_empty() {
        lines.extend(["## Warnings".to_string(), String::new()]);
        for message in &warnings {
            lines.push(MarkdownFormatter::render_message(message));
            lines.push(String::new());
        }
    }
    if include_passed && !passed.is_empty() {
        lines.extend(["## Passed".to_string(), String::new()]);
        for message in &passed {
            lines.push(format!("- ✅ `{}`: {}", message.code, message.what));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Renders a full markdown report. Deterministic: identical input gives
/// byte-identical output.
#[must_use]
pub fn render_report_md(messages: &[A11yMessage], title: &str) -> String {
    render_report(messages, title, true)
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
