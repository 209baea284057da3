//! Color rules (CLR0xx), mapped to WCAG success criteria.

use crate::message::{A11yMessage, Location, codes};

use super::lexicon::{ANSI_COLOR_RE, COLOR_WORD_RE, STATUS_LABEL_RE};
use super::{LineContext, Rule, RuleCategory};

/// CLR001 (WCAG SC 1.4.1): meaning must never depend on color alone.
///
/// Two independent sub-checks, combined with logical OR:
/// - raw ANSI SGR color sequences on a line with no textual status label;
/// - prose that names a color as the carrier of meaning ("shown in red").
pub struct NoColorOnly;

impl NoColorOnly {
    fn ansi_without_label(line: &str) -> bool {
        if !ANSI_COLOR_RE.is_match(line) {
            return false;
        }
        // Strip escapes before looking for a label so that colored label text
        // still counts as a label.
        let stripped = ANSI_COLOR_RE.replace_all(line, "");
        !STATUS_LABEL_RE.is_match(&stripped)
    }
}

impl Rule for NoColorOnly {
    fn name(&self) -> &'static str {
        "no-color-only"
    }

    fn code(&self) -> &'static str {
        codes::COLOR_ONLY_INFO
    }

    fn description(&self) -> &'static str {
        "Check for color-only information"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Wcag
    }

    fn wcag_ref(&self) -> Option<&'static str> {
        Some("1.4.1")
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        let color_phrase = COLOR_WORD_RE.find(line);
        if color_phrase.is_none() && !Self::ansi_without_label(line) {
            return Vec::new();
        }

        let context = color_phrase.map_or_else(
            || ANSI_COLOR_RE.replace_all(line, "").trim().to_string(),
            |m| m.as_str().to_string(),
        );
        vec![
            A11yMessage::error(
                self.code(),
                "Information conveyed only through color",
                "Users who are colorblind or using monochrome displays cannot \
                 perceive color-based information. This violates WCAG 2.1 SC 1.4.1.",
                "Supplement color with text indicators like [ERROR], [OK], or icons. \
                 Never rely solely on color to convey meaning.",
                self.name(),
            )
            .with_location(Location::new(ctx.file, ctx.line).with_context(&context)),
        ]
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
