//! Accessibility rules for CLI output text.
//!
//! Rule categories:
//! - WCAG: mapped to a WCAG success criterion; failures are accessibility
//!   violations.
//! - Policy: cognitive accessibility and best-practice checks beyond minimum
//!   WCAG compliance.
//!
//! Rules are stateless and independently evaluable: no rule depends on the
//! result of another, so arbitrary enable/disable subsets never change the
//! meaning of the remaining rules.

mod color;
mod format;
mod language;
pub mod lexicon;
mod screen;
mod structure;

pub use structure::check_messages as check_messages_structure;

use crate::message::A11yMessage;

/// Category of accessibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Mapped to a WCAG success criterion.
    Wcag,
    /// Best practice / cognitive accessibility.
    Policy,
}

/// Per-line evaluation context.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Source name for locations (file path or `<stdin>`).
    pub file: Option<&'a str>,
    /// 1-based line number.
    pub line: usize,
}

/// Tunable policy constants for the rule set.
///
/// Changing a default is a minor-version behavior change; severities under the
/// frozen schema never change silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSettings {
    /// Maximum line length in characters (FMT001).
    pub max_line_length: usize,
    /// Emoji count above which SCR001 fires.
    pub emoji_threshold: usize,
    /// Minimum uppercase run length considered shouting (LNG002).
    pub caps_min_run: usize,
    /// Minimum fraction of uppercase alphabetic content for LNG002.
    pub caps_ratio: f64,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            max_line_length: 120,
            emoji_threshold: 2,
            caps_min_run: 4,
            caps_ratio: 0.5,
        }
    }
}

/// A named, stateless, deterministic accessibility check.
///
/// Line-scope rules implement [`Rule::check_line`]; whole-text rules implement
/// [`Rule::check_text`], which the scanner runs once after all lines.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn code(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn category(&self) -> RuleCategory {
        RuleCategory::Policy
    }

    /// WCAG success criterion reference; `Some` only for WCAG rules.
    fn wcag_ref(&self) -> Option<&'static str> {
        None
    }

    fn check_line(&self, _line: &str, _ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        Vec::new()
    }

    fn check_text(&self, _text: &str, _file: Option<&str>) -> Vec<A11yMessage> {
        Vec::new()
    }

    /// Whether this rule runs once over the whole text instead of per line.
    fn is_text_scope(&self) -> bool {
        false
    }
}

/// Builds the full rule set in registration order.
///
/// Registration order is the tie-break for same-line findings, so it must
/// stay stable across releases.
#[must_use]
pub fn all_rules(settings: &RuleSettings) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(format::LineLength::new(settings.max_line_length)),
        Box::new(language::NoAllCaps::new(
            settings.caps_min_run,
            settings.caps_ratio,
        )),
        Box::new(language::PlainLanguage),
        Box::new(screen::EmojiModeration::new(settings.emoji_threshold)),
        Box::new(language::Punctuation),
        Box::new(language::NoAmbiguousPronouns),
        Box::new(color::NoColorOnly),
        Box::new(structure::ErrorStructure),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
