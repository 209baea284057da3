//! The canonical finding record for accessibility checks.
//!
//! Every check result is an [`A11yMessage`] following the What/Why/Fix
//! structure, serialized to the frozen `cli.error.v0.1` JSON shape.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of the `what` field and location context (schema limit).
pub const MAX_WHAT_LEN: usize = 200;
/// Maximum length of the `why` and `fix` fields (schema limit).
pub const MAX_WHY_FIX_LEN: usize = 500;

/// Canonical error-code pattern: 2-4 leading alphanumerics (starting with a
/// letter) followed by 3 digits. Examples: A11Y001, FMT001, CLI002.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]{1,3}[0-9]{3}$").expect("valid code pattern"));

/// Checks whether a code matches the canonical `[A-Z][A-Z0-9]{1,3}[0-9]{3}` form.
#[must_use]
pub fn is_canonical_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Severity level of an accessibility check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Check passed.
    Ok,
    /// Advisory finding.
    Warn,
    /// Accessibility violation.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Location of a finding in the source text. Line and column are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Short excerpt of the offending text, truncated for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(file: Option<&str>, line: usize) -> Self {
        Self {
            file: file.map(str::to_string),
            line: Some(line),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(truncate(context, MAX_WHAT_LEN));
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(file) = &self.file {
            parts.push(file.clone());
        }
        if let Some(line) = self.line {
            parts.push(format!("line {line}"));
        }
        if let Some(column) = self.column {
            parts.push(format!("col {column}"));
        }
        if parts.is_empty() {
            f.write_str("<unknown>")
        } else {
            f.write_str(&parts.join(":"))
        }
    }
}

/// An accessibility check result with What/Why/Fix structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A11yMessage {
    pub level: Level,
    /// Stable rule-instance identifier, e.g. `FMT001`.
    pub code: String,
    /// One-line description of the detected condition.
    pub what: String,
    /// Why the condition matters for accessibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// Actionable remediation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Human-readable rule name, e.g. `no-color-only`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Rule-specific auxiliary data, never required for validity.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl A11yMessage {
    /// Creates an OK (passing) check result.
    #[must_use]
    pub fn ok(code: &str, what: &str, rule: &str) -> Self {
        Self {
            level: Level::Ok,
            code: code.to_string(),
            what: truncate(what, MAX_WHAT_LEN),
            why: None,
            fix: None,
            location: None,
            rule: Some(rule.to_string()),
            metadata: serde_json::Map::new(),
        }
    }

    /// Creates a WARN (advisory) check result.
    #[must_use]
    pub fn warn(code: &str, what: &str, why: &str, fix: &str, rule: &str) -> Self {
        Self {
            level: Level::Warn,
            code: code.to_string(),
            what: truncate(what, MAX_WHAT_LEN),
            why: Some(truncate(why, MAX_WHY_FIX_LEN)),
            fix: Some(truncate(fix, MAX_WHY_FIX_LEN)),
            location: None,
            rule: Some(rule.to_string()),
            metadata: serde_json::Map::new(),
        }
    }

    /// Creates an ERROR (failing) check result.
    #[must_use]
    pub fn error(code: &str, what: &str, why: &str, fix: &str, rule: &str) -> Self {
        Self {
            level: Level::Error,
            ..Self::warn(code, what, why, fix, rule)
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Line of the finding, if located. Unlocated messages sort last.
    #[must_use]
    pub fn sort_line(&self) -> usize {
        self.location
            .as_ref()
            .and_then(|loc| loc.line)
            .unwrap_or(usize::MAX)
    }

    /// Treats a missing or blank `why` as absent.
    #[must_use]
    pub fn has_why(&self) -> bool {
        self.why.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Treats a missing or blank `fix` as absent.
    #[must_use]
    pub fn has_fix(&self) -> bool {
        self.fix.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Stable error codes for accessibility checks, grouped by family.
pub mod codes {
    // Structure (A11Y0xx)
    pub const MISSING_ERROR_CODE: &str = "A11Y001";
    pub const MISSING_WHAT: &str = "A11Y002";
    pub const MISSING_WHY: &str = "A11Y003";
    pub const MISSING_FIX: &str = "A11Y004";
    pub const INVALID_LEVEL: &str = "A11Y005";

    // Format (FMT0xx)
    pub const LINE_TOO_LONG: &str = "FMT001";

    // Language (LNG0xx)
    pub const JARGON_DETECTED: &str = "LNG001";
    pub const ALL_CAPS_MESSAGE: &str = "LNG002";
    pub const NO_PUNCTUATION: &str = "LNG003";
    pub const AMBIGUOUS_PRONOUN: &str = "LNG004";

    // Color/contrast (CLR0xx)
    pub const COLOR_ONLY_INFO: &str = "CLR001";

    // Screen reader (SCR0xx)
    pub const EMOJI_OVERUSE: &str = "SCR001";
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
