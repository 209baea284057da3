//! Validation against the frozen `cli.error.v0.1` message schema.
//!
//! The schema is frozen: behavior for a given version never changes across
//! releases, and an incompatible shape requires a new version identifier.
//! Validation problems are returned as data, never raised, so a single pass
//! over a batch of messages surfaces every problem at once.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{A11yLintError, Result};
use crate::message::{A11yMessage, MAX_WHAT_LEN, MAX_WHY_FIX_LEN, is_canonical_code};

/// Supported schema version.
pub const SCHEMA_VERSION: &str = "0.1";

/// The frozen schema document, served verbatim by the `schema` command.
pub const SCHEMA_JSON: &str = include_str!("../schemas/cli.error.schema.v0.1.json");

/// A single schema violation: the offending field and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub reason: String,
}

impl ValidationIssue {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

const LEVELS: &[&str] = &["OK", "WARN", "ERROR"];

/// Validates a JSON value against the `cli.error.v0.1` shape.
///
/// All issues are collected in one pass. Unknown top-level fields are
/// permitted: the contract evolves additively.
#[must_use]
pub fn validate_value(value: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(object) = value.as_object() else {
        issues.push(ValidationIssue::new("root", "expected an object"));
        return issues;
    };

    check_level(object.get("level"), &mut issues);
    check_code(object.get("code"), &mut issues);
    check_what(object.get("what"), &mut issues);
    check_optional_string(object.get("why"), "why", MAX_WHY_FIX_LEN, &mut issues);
    check_optional_string(object.get("fix"), "fix", MAX_WHY_FIX_LEN, &mut issues);
    check_location(object.get("location"), &mut issues);

    if let Some(rule) = object.get("rule")
        && !rule.is_string()
    {
        issues.push(ValidationIssue::new("rule", "expected a string"));
    }
    if let Some(metadata) = object.get("metadata")
        && !metadata.is_object()
    {
        issues.push(ValidationIssue::new("metadata", "expected an object"));
    }

    issues
}

fn check_level(level: Option<&Value>, issues: &mut Vec<ValidationIssue>) {
    match level {
        None => issues.push(ValidationIssue::new("level", "required field is missing")),
        Some(Value::String(s)) if LEVELS.contains(&s.as_str()) => {}
        Some(Value::String(s)) => issues.push(ValidationIssue::new(
            "level",
            format!("'{s}' is not one of OK, WARN, ERROR"),
        )),
        Some(_) => issues.push(ValidationIssue::new("level", "expected a string")),
    }
}

fn check_code(code: Option<&Value>, issues: &mut Vec<ValidationIssue>) {
    match code {
        None => issues.push(ValidationIssue::new("code", "required field is missing")),
        Some(Value::String(s)) if s.is_empty() => {
            issues.push(ValidationIssue::new("code", "must not be empty"));
        }
        Some(Value::String(s)) if !is_canonical_code(s) => issues.push(ValidationIssue::new(
            "code",
            format!("'{s}' does not match pattern [A-Z][A-Z0-9]{{1,3}}[0-9]{{3}}"),
        )),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(ValidationIssue::new("code", "expected a string")),
    }
}

fn check_what(what: Option<&Value>, issues: &mut Vec<ValidationIssue>) {
    match what {
        None => issues.push(ValidationIssue::new("what", "required field is missing")),
        Some(Value::String(s)) if s.trim().is_empty() => {
            issues.push(ValidationIssue::new("what", "must not be empty"));
        }
        Some(Value::String(s)) if s.chars().count() > MAX_WHAT_LEN => issues.push(
            ValidationIssue::new("what", format!("exceeds {MAX_WHAT_LEN} characters")),
        ),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(ValidationIssue::new("what", "expected a string")),
    }
}

fn check_optional_string(
    value: Option<&Value>,
    field: &str,
    max_len: usize,
    issues: &mut Vec<ValidationIssue>,
) {
    match value {
        None => {}
        Some(Value::String(s)) if s.chars().count() > max_len => issues.push(
            ValidationIssue::new(field, format!("exceeds {max_len} characters")),
        ),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(ValidationIssue::new(field, "expected a string")),
    }
}

fn check_location(location: Option<&Value>, issues: &mut Vec<ValidationIssue>) {
    let Some(location) = location else {
        return;
    };
    let Some(object) = location.as_object() else {
        issues.push(ValidationIssue::new("location", "expected an object"));
        return;
    };

    if let Some(file) = object.get("file")
        && !file.is_string()
    {
        issues.push(ValidationIssue::new("location.file", "expected a string"));
    }
    check_positive_int(object.get("line"), "location.line", issues);
    check_positive_int(object.get("column"), "location.column", issues);
    check_optional_string(object.get("context"), "location.context", MAX_WHAT_LEN, issues);
}

fn check_positive_int(value: Option<&Value>, field: &str, issues: &mut Vec<ValidationIssue>) {
    match value {
        None => {}
        Some(Value::Number(n)) if n.as_u64().is_some_and(|v| v >= 1) => {}
        Some(_) => issues.push(ValidationIssue::new(
            field,
            "expected a positive integer (>= 1)",
        )),
    }
}

/// Validates an [`A11yMessage`] via its JSON serialization.
#[must_use]
pub fn validate_message(message: &A11yMessage) -> Vec<ValidationIssue> {
    match serde_json::to_value(message) {
        Ok(value) => validate_value(&value),
        Err(e) => vec![ValidationIssue::new("root", format!("serialization failed: {e}"))],
    }
}

/// True iff the value has no schema violations.
#[must_use]
pub fn is_valid(value: &Value) -> bool {
    validate_value(value).is_empty()
}

/// True iff the message has no schema violations.
#[must_use]
pub fn is_valid_message(message: &A11yMessage) -> bool {
    validate_message(message).is_empty()
}

/// Rejects values that declare an unsupported schema version.
pub fn check_schema_version(value: &Value) -> Result<()> {
    let Some(found) = value.get("schema_version") else {
        return Ok(());
    };
    let found = found.as_str().unwrap_or("<non-string>");
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(A11yLintError::SchemaVersion {
            required: SCHEMA_VERSION.to_string(),
            found: found.to_string(),
        })
    }
}

/// Result of validating a JSON file of messages.
#[derive(Debug, Default)]
pub struct FileValidation {
    /// Messages that passed schema validation, in input order.
    pub valid: Vec<A11yMessage>,
    /// Per-element issues, tagged with the element index.
    pub issues: Vec<(usize, ValidationIssue)>,
}

impl FileValidation {
    #[must_use]
    pub fn is_all_valid(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        let invalid: std::collections::BTreeSet<usize> =
            self.issues.iter().map(|(i, _)| *i).collect();
        self.valid.len() + invalid.len()
    }

    /// One-line validation summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "No messages validated".to_string();
        }
        if self.is_all_valid() {
            return format!("All {total} message(s) valid");
        }
        format!(
            "Validated {total} message(s): {} valid, {} invalid",
            self.valid.len(),
            total - self.valid.len()
        )
    }

    /// Detailed per-message error report.
    #[must_use]
    pub fn error_report(&self) -> String {
        if self.issues.is_empty() {
            return "No errors".to_string();
        }
        let mut lines = vec![format!("{} validation issue(s):", self.issues.len())];
        for (index, issue) in &self.issues {
            lines.push(format!("  Message {index}: {issue}"));
        }
        lines.join("\n")
    }
}

/// Validates a JSON file containing one message object or an array of them.
///
/// Validation continues past individual failures: every element's issues are
/// reported with its index.
pub fn validate_json_file(path: &Path) -> Result<FileValidation> {
    let content = fs::read_to_string(path).map_err(|source| A11yLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content)?;

    let elements: Vec<Value> = match data {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => {
            return Err(A11yLintError::Config(
                "JSON must be a message object or an array of message objects".to_string(),
            ));
        }
    };

    let mut result = FileValidation::default();
    for (index, element) in elements.iter().enumerate() {
        check_schema_version(element)?;
        let issues = validate_value(element);
        if issues.is_empty() {
            match serde_json::from_value::<A11yMessage>(element.clone()) {
                Ok(message) => result.valid.push(message),
                Err(e) => result
                    .issues
                    .push((index, ValidationIssue::new("root", e.to_string()))),
            }
        } else {
            result
                .issues
                .extend(issues.into_iter().map(|issue| (index, issue)));
        }
    }
    Ok(result)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
