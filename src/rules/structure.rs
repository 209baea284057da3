//! Message-structure rules (A11Y0xx).
//!
//! Accessible error output follows the What/Why/Fix structure. This rule
//! checks it two ways: over raw text blocks tagged `[ERROR]`/`[WARN]`, and
//! over already-parsed [`A11yMessage`] values (used after schema validation).

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{A11yMessage, Level, Location, codes};

use super::Rule;

/// Line opening an error or warning block.
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\[(error|fail(?:ed)?|warn(?:ing)?)\]|(error|fail(?:ed)?|warn(?:ing)?):)")
        .expect("valid block tag pattern")
});

static WHY_WORDS: &[&str] = &["because", "since", "due to", "reason"];
static FIX_WORDS: &[&str] = &["try", "fix", "resolve", "solution", "you can"];

/// A11Y003: error/warning messages without an explanation or remedy.
pub struct ErrorStructure;

struct Block<'a> {
    line: usize,
    tag_line: &'a str,
    is_error: bool,
    has_why: bool,
    has_fix: bool,
}

impl ErrorStructure {
    fn tag_is_error(tag: &str) -> bool {
        let lower = tag.to_lowercase();
        lower.starts_with("error") || lower.starts_with("fail")
    }

    fn contains_any(haystack: &str, needles: &[&str]) -> bool {
        let lower = haystack.to_lowercase();
        needles.iter().any(|n| lower.contains(n))
    }

    /// A continuation line belongs to the preceding tagged block: it is
    /// indented, or starts with a `Why:`/`Fix:` label.
    fn is_continuation(line: &str) -> bool {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return false;
        }
        line.starts_with([' ', '\t'])
            || trimmed.to_lowercase().starts_with("why:")
            || trimmed.to_lowercase().starts_with("fix:")
    }

    fn collect_blocks<'a>(lines: &[(usize, &'a str)]) -> Vec<Block<'a>> {
        let mut blocks: Vec<Block<'a>> = Vec::new();
        for (number, line) in lines {
            if let Some(captures) = BLOCK_TAG_RE.captures(line) {
                let tag = captures
                    .get(1)
                    .or_else(|| captures.get(2))
                    .map_or("", |m| m.as_str());
                blocks.push(Block {
                    line: *number,
                    tag_line: line,
                    is_error: Self::tag_is_error(tag),
                    has_why: Self::contains_any(line, WHY_WORDS),
                    has_fix: Self::contains_any(line, FIX_WORDS),
                });
            } else if Self::is_continuation(line) {
                if let Some(block) = blocks.last_mut() {
                    let trimmed = line.trim_start().to_lowercase();
                    if trimmed.starts_with("why:") || Self::contains_any(line, WHY_WORDS) {
                        block.has_why = true;
                    }
                    if trimmed.starts_with("fix:") || Self::contains_any(line, FIX_WORDS) {
                        block.has_fix = true;
                    }
                }
            }
        }
        blocks
    }

    fn finding_for(block: &Block<'_>, file: Option<&str>) -> Option<A11yMessage> {
        if block.has_why && block.has_fix {
            return None;
        }

        let missing = match (block.has_why, block.has_fix) {
            (false, false) => "explanation and fix suggestion",
            (false, true) => "explanation",
            (true, false) => "fix suggestion",
            (true, true) => unreachable!(),
        };
        let what = format!("Message lacks {missing}");
        let why = "Users benefit from understanding why a problem occurred and how to \
                   fix it. This is especially important for users with cognitive \
                   disabilities.";
        let fix = "Add a 'Why:' line explaining the cause and a 'Fix:' line suggesting \
                   how to resolve it.";
        let location = Location::new(file, block.line).with_context(block.tag_line.trim());

        // Escalates to ERROR when an error-tagged block is missing both parts.
        let message = if block.is_error && !block.has_why && !block.has_fix {
            A11yMessage::error(codes::MISSING_WHY, &what, why, fix, "error-structure")
        } else {
            A11yMessage::warn(codes::MISSING_WHY, &what, why, fix, "error-structure")
        };
        Some(message.with_location(location))
    }
}

impl Rule for ErrorStructure {
    fn name(&self) -> &'static str {
        "error-structure"
    }

    fn code(&self) -> &'static str {
        codes::MISSING_WHY
    }

    fn description(&self) -> &'static str {
        "Check What/Why/Fix structure"
    }

    fn is_text_scope(&self) -> bool {
        true
    }

    fn check_text(&self, text: &str, file: Option<&str>) -> Vec<A11yMessage> {
        let lines: Vec<(usize, &str)> = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .collect();

        Self::collect_blocks(&lines)
            .iter()
            .filter_map(|block| Self::finding_for(block, file))
            .collect()
    }
}

/// Checks a parsed message for the What/Why/Fix structure.
///
/// WARN and ERROR messages should carry `why`; a `fix` is recommended and its
/// absence on an ERROR is flagged. An ERROR message missing both escalates
/// the finding to ERROR severity.
#[must_use]
pub fn check_message(message: &A11yMessage) -> Option<A11yMessage> {
    if message.level == Level::Ok {
        return None;
    }
    let has_why = message.has_why();
    let has_fix = message.has_fix();
    if has_why && has_fix {
        return None;
    }

    let missing = match (has_why, has_fix) {
        (false, false) => "'why' and 'fix'",
        (false, true) => "'why'",
        (true, false) => "'fix'",
        (true, true) => unreachable!(),
    };
    let what = format!("{} message '{}' is missing {missing}", message.level, message.code);
    let why = "Accessible error messages explain why the problem occurred and how to \
               fix it, following the What/Why/Fix structure.";
    let fix = "Populate the 'why' and 'fix' fields of the message.";

    let finding = if message.level == Level::Error && !has_why && !has_fix {
        A11yMessage::error(codes::MISSING_WHY, &what, why, fix, "error-structure")
    } else {
        A11yMessage::warn(codes::MISSING_WHY, &what, why, fix, "error-structure")
    };
    Some(finding.with_metadata("checked_code", message.code.clone().into()))
}

/// Runs [`check_message`] over a sequence, tagging each finding with the index
/// of the offending message.
#[must_use]
pub fn check_messages(messages: &[A11yMessage]) -> Vec<A11yMessage> {
    messages
        .iter()
        .enumerate()
        .filter_map(|(index, message)| {
            check_message(message).map(|finding| finding.with_metadata("index", index.into()))
        })
        .collect()
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
