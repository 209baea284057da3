//! Language rules (LNG0xx): jargon, shouting, punctuation, pronouns.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{A11yMessage, Location, codes};

use super::lexicon::{AMBIGUOUS_PRONOUNS, CAPS_ALLOWLIST, CAPS_RUN_RE, JARGON_RE, JARGON_TERMS, LEVEL_TAG_RE};
use super::{LineContext, Rule};

/// LNG002: sustained all-caps text reads as shouting and screen readers may
/// spell it letter by letter.
pub struct NoAllCaps {
    min_run: usize,
    ratio: f64,
}

impl NoAllCaps {
    #[must_use]
    pub const fn new(min_run: usize, ratio: f64) -> Self {
        Self { min_run, ratio }
    }
}

impl Rule for NoAllCaps {
    fn name(&self) -> &'static str {
        "no-all-caps"
    }

    fn code(&self) -> &'static str {
        codes::ALL_CAPS_MESSAGE
    }

    fn description(&self) -> &'static str {
        "Check for all-caps text"
    }

    #[allow(clippy::cast_precision_loss)]
    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        let runs: Vec<&str> = CAPS_RUN_RE
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|run| run.len() >= self.min_run && !CAPS_ALLOWLIST.contains(run))
            .collect();
        if runs.is_empty() {
            return Vec::new();
        }

        let alphabetic = line.chars().filter(|c| c.is_alphabetic()).count();
        let uppercase = line.chars().filter(|c| c.is_uppercase()).count();
        if alphabetic == 0 || (uppercase as f64) / (alphabetic as f64) < self.ratio {
            return Vec::new();
        }

        let sample = runs
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            A11yMessage::warn(
                self.code(),
                &format!("All-caps text detected: {sample}"),
                "All-caps text is harder to read and may be interpreted as shouting. \
                 Screen readers may spell out each letter instead of reading words.",
                "Use sentence case or title case instead of all caps.",
                self.name(),
            )
            .with_location(Location::new(ctx.file, ctx.line))
            .with_metadata("caps_words", runs.len().into()),
        ]
    }
}

/// Gloss markers that count as an inline explanation of a jargon token.
static GLOSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bi\.e\.|\bthat is\b|\bmeaning\b").expect("valid gloss pattern"));

/// LNG001: technical jargon without an inline explanation.
pub struct PlainLanguage;

impl PlainLanguage {
    fn expansion_for(term: &str) -> &'static str {
        JARGON_TERMS
            .iter()
            .find(|(t, _)| *t == term)
            .map_or("the term", |(_, expansion)| expansion)
    }

    /// A token followed (ignoring spaces) by a parenthetical counts as glossed.
    fn is_glossed(line: &str, match_end: usize) -> bool {
        line[match_end..].trim_start().starts_with('(')
    }
}

impl Rule for PlainLanguage {
    fn name(&self) -> &'static str {
        "plain-language"
    }

    fn code(&self) -> &'static str {
        codes::JARGON_DETECTED
    }

    fn description(&self) -> &'static str {
        "Check for unexplained jargon"
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        if GLOSS_RE.is_match(line) {
            return Vec::new();
        }

        for m in JARGON_RE.find_iter(line) {
            if Self::is_glossed(line, m.end()) {
                continue;
            }

            let column = line[..m.start()].chars().count() + 1;
            let term = m.as_str();
            return vec![
                A11yMessage::warn(
                    self.code(),
                    &format!("Technical jargon detected: '{term}'"),
                    "Technical abbreviations may be unfamiliar to new users or those \
                     using assistive technologies that read text literally.",
                    &format!(
                        "Consider expanding or explaining the term: {}",
                        Self::expansion_for(term)
                    ),
                    self.name(),
                )
                .with_location(
                    Location::new(ctx.file, ctx.line)
                        .with_column(column)
                        .with_context(term),
                ),
            ];
        }
        Vec::new()
    }
}

/// Tag prefix that marks a status message: `[ERROR]`, `WARN:` and similar.
static TAG_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[A-Za-z]+\]|^[A-Z][A-Z]+:").expect("valid tag pattern"));

/// LNG003: complete messages should end with terminal punctuation so screen
/// readers pause and intone correctly.
pub struct Punctuation;

impl Punctuation {
    fn looks_like_sentence(line: &str) -> bool {
        if TAG_START_RE.is_match(line) {
            return true;
        }
        line.chars().next().is_some_and(char::is_uppercase)
    }
}

impl Rule for Punctuation {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn code(&self) -> &'static str {
        codes::NO_PUNCTUATION
    }

    fn description(&self) -> &'static str {
        "Check message punctuation"
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        let stripped = line.trim_end();
        if stripped.is_empty()
            || !stripped.chars().any(char::is_alphabetic)
            || stripped.split_whitespace().count() < 2
            || !Self::looks_like_sentence(stripped)
        {
            return Vec::new();
        }

        if stripped
            .chars()
            .next_back()
            .is_some_and(|c| matches!(c, '.' | '!' | '?' | ':'))
        {
            return Vec::new();
        }

        let tail: String = {
            let chars: Vec<char> = stripped.chars().collect();
            chars[chars.len().saturating_sub(50)..].iter().collect()
        };
        vec![
            A11yMessage::warn(
                self.code(),
                "Message lacks ending punctuation",
                "Proper punctuation helps screen readers use appropriate pauses and \
                 intonation, improving comprehension.",
                "End messages with appropriate punctuation (period, exclamation, \
                 question mark, or colon).",
                self.name(),
            )
            .with_location(Location::new(ctx.file, ctx.line).with_context(&tail)),
        ]
    }
}

/// Pronoun opening a message, followed by at least one more word.
static PRONOUN_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^["'`]?(it|this|that|these|those)\b\s+\S"#).expect("valid pronoun pattern")
});

/// LNG004: a message that opens with "it"/"this"/... has no referent yet.
pub struct NoAmbiguousPronouns;

impl NoAmbiguousPronouns {
    /// Extracts the leading pronoun of `fragment`, if any.
    fn leading_pronoun(fragment: &str) -> Option<&str> {
        let captures = PRONOUN_START_RE.captures(fragment.trim_start())?;
        let pronoun = captures.get(1)?.as_str();
        debug_assert!(AMBIGUOUS_PRONOUNS.contains(&pronoun.to_lowercase().as_str()));
        Some(pronoun)
    }

    /// Message fragments to inspect: the line itself, plus the content after
    /// every level tag (`ERROR:`, `[WARN]`...), so tagged messages embedded in
    /// a longer line are still caught.
    fn fragments(line: &str) -> Vec<&str> {
        let mut fragments = vec![line];
        for m in LEVEL_TAG_RE.find_iter(line) {
            fragments.push(&line[m.end()..]);
        }
        fragments
    }
}

impl Rule for NoAmbiguousPronouns {
    fn name(&self) -> &'static str {
        "no-ambiguous-pronouns"
    }

    fn code(&self) -> &'static str {
        codes::AMBIGUOUS_PRONOUN
    }

    fn description(&self) -> &'static str {
        "Check for ambiguous pronouns"
    }

    fn check_line(&self, line: &str, ctx: &LineContext<'_>) -> Vec<A11yMessage> {
        let trimmed = line.trim();
        for fragment in Self::fragments(trimmed) {
            if let Some(pronoun) = Self::leading_pronoun(fragment) {
                return vec![
                    A11yMessage::warn(
                        self.code(),
                        &format!("Ambiguous pronoun '{pronoun}' without clear referent"),
                        "Pronouns without clear referents can confuse users, especially \
                         those with cognitive disabilities or those using screen readers.",
                        "Replace the pronoun with the specific thing being referenced.",
                        self.name(),
                    )
                    .with_location(
                        Location::new(ctx.file, ctx.line).with_context(fragment.trim()),
                    )
                    .with_metadata("pronoun", pronoun.to_lowercase().into()),
                ];
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
