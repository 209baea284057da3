//! Screen-reader rules (SCR0xx).

use crate::message::{A11yMessage, Location, codes};

use super::lexicon::{has_status_word, is_emoji};
use super::{LineContext, Rule};

/// SCR001: screen readers announce every emoji by name; too many, or an emoji
/// standing in for a textual status, disrupts comprehension.
pub struct EmojiModeration {
    threshold: usize,
}

impl EmojiModeration {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// An emoji leading a line that carries no textual status word is acting
    /// as the sole status indicator.
    fn emoji_as_sole_status(line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.chars().next().is_some_and(is_emoji) && !has_status_word(trimmed)
    }
}

impl Rule for EmojiModeration {
    fn name(&self) -> &'static str {
        "emoji-moderation"
    }

    fn code(&self) -> &'static str {
        codes::EMOJI_OVERUSE
    }

    fn description(&self) -> &'static str {
        "Check emoji overuse"
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        let count = line.chars().filter(|c| is_emoji(*c)).count();
        let overuse = count > self.threshold;
        let sole_status = count > 0 && Self::emoji_as_sole_status(line);
        if !overuse && !sole_status {
            return Vec::new();
        }

        let what = if overuse {
            format!("Excessive emoji use ({count} emoji in message)")
        } else {
            "Emoji used as the sole status indicator".to_string()
        };
        vec![
            A11yMessage::warn(
                self.code(),
                &what,
                "Screen readers announce each emoji by name, which can be verbose \
                 and interrupt the flow of information.",
                "Limit emoji per message and ensure meaning is also conveyed in text.",
                self.name(),
            )
            .with_location(Location::new(ctx.file, ctx.line))
            .with_metadata("emoji_count", count.into()),
        ]
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
