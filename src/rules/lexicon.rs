//! Fixed term lists and compiled patterns shared by the rules.
//!
//! All lists live here as process-wide read-only state so that policy can be
//! reviewed and extended without touching rule logic.

use std::sync::LazyLock;

use regex::Regex;

/// Technical jargon tokens paired with an accessible expansion.
pub const JARGON_TERMS: &[(&str, &str)] = &[
    ("NaN", "NaN (Not a Number)"),
    ("EOF", "EOF (End of File)"),
    ("EOL", "EOL (End of Line)"),
    ("STDIN", "STDIN (standard input)"),
    ("STDOUT", "STDOUT (standard output)"),
    ("STDERR", "STDERR (standard error)"),
    ("SIGKILL", "the SIGKILL signal"),
    ("SIGTERM", "the SIGTERM signal"),
    ("OOM", "OOM (Out of Memory)"),
    ("TTY", "TTY (terminal)"),
    ("PID", "PID (process ID)"),
    ("UID", "UID (user ID)"),
    ("GID", "GID (group ID)"),
    ("ENOENT", "ENOENT (no such file or directory)"),
    ("EACCES", "EACCES (permission denied)"),
    ("EPERM", "EPERM (operation not permitted)"),
];

/// Acronyms exempt from the no-all-caps rule.
pub const CAPS_ALLOWLIST: &[&str] = &[
    "ERROR", "WARN", "WARNING", "INFO", "DEBUG", "FATAL", "TRACE", "HTTP", "HTTPS", "JSON",
    "YAML", "TOML", "UTF", "ASCII", "URL", "URI", "API",
];

/// Pronouns that are ambiguous when they open a message.
pub const AMBIGUOUS_PRONOUNS: &[&str] = &["it", "this", "that", "these", "those"];

/// Words that label a status textually (so color/emoji is not the sole signal).
pub const STATUS_WORDS: &[&str] = &[
    "ok", "pass", "passed", "fail", "failed", "error", "warn", "warning", "success", "done",
    "info",
];

/// Jargon tokens as one alternation, word-bounded.
pub static JARGON_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = JARGON_TERMS
        .iter()
        .map(|(term, _)| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid jargon pattern")
});

/// A run of uppercase letters (candidate all-caps word).
pub static CAPS_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,}").expect("valid caps pattern"));

/// ANSI SGR sequence carrying a color parameter (30-37, 90-97, 38/48 extended).
pub static ANSI_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*(?:3[0-8]|4[0-8]|9[0-7]|10[0-7])[0-9;]*m")
        .expect("valid ansi pattern")
});

/// Phrases that convey meaning through a color name alone.
pub static COLOR_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:shown in (red|green|yellow|blue)|(red|green|yellow|blue) indicates|highlighted in (red|green|yellow|blue)|marked (red|green|yellow|blue))\b",
    )
    .expect("valid color-word pattern")
});

/// A textual status label: `[OK]`, `ERROR:`, `WARN -` and similar.
pub static STATUS_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(ok|pass(ed)?|fail(ed)?|error|warn(ing)?|info|success|done)\]|\b(ok|passed|failed|error|warning|success|done)\b")
        .expect("valid status label pattern")
});

/// Level tag opening an error/warning block: `[ERROR]`, `ERROR:`, `WARN:`.
pub static LEVEL_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(error|warn(?:ing)?|fail(?:ed)?)\]|\b(error|warn(?:ing)?|fail(?:ed)?):")
        .expect("valid level tag pattern")
});

/// Whether a character is an emoji scalar for the purposes of SCR001.
#[must_use]
pub const fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F300}'..='\u{1F9FF}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{1FA00}'..='\u{1FAFF}'
            | '\u{2B00}'..='\u{2BFF}'
            | '\u{1F1E6}'..='\u{1F1FF}'
    )
}

/// Whether a line contains any textual status word (case-insensitive).
#[must_use]
pub fn has_status_word(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| STATUS_WORDS.contains(&word))
}

#[cfg(test)]
#[path = "lexicon_tests.rs"]
mod tests;
