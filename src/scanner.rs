//! Scan orchestration: applies the active rule set to a text.
//!
//! Scanning is a pure function of (active rule set, input text): the scanner
//! never retains produced messages, and identical input under an identical
//! configuration yields a byte-identical message sequence.

use std::fs;
use std::path::Path;

use crate::error::{A11yLintError, Result};
use crate::message::A11yMessage;
use crate::rules::{self, LineContext, Rule, RuleSettings};

pub struct Scanner {
    rules: Vec<Box<dyn Rule>>,
    /// Active flags, parallel to `rules` (registration order preserved).
    active: Vec<bool>,
    emit_ok_summary: bool,
}

impl Scanner {
    /// Creates a scanner with the full default rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&RuleSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: &RuleSettings) -> Self {
        let rules = rules::all_rules(settings);
        let active = vec![true; rules.len()];
        Self {
            rules,
            active,
            emit_ok_summary: false,
        }
    }

    /// When set, the scan appends one OK message per active rule that produced
    /// no findings, so downstream tallies can count passes.
    #[must_use]
    pub const fn with_ok_summary(mut self, emit: bool) -> Self {
        self.emit_ok_summary = emit;
        self
    }

    fn rule_index(&self, name: &str) -> Result<usize> {
        self.rules
            .iter()
            .position(|rule| rule.name() == name)
            .ok_or_else(|| A11yLintError::UnknownRule {
                name: name.to_string(),
            })
    }

    /// Enables a rule by name. Re-enabling an active rule is a no-op; an
    /// unknown name is a configuration error.
    pub fn enable_rule(&mut self, name: &str) -> Result<()> {
        let index = self.rule_index(name)?;
        self.active[index] = true;
        Ok(())
    }

    /// Disables a rule by name. Disabling an already-inactive rule is a
    /// no-op; an unknown name is a configuration error.
    pub fn disable_rule(&mut self, name: &str) -> Result<()> {
        let index = self.rule_index(name)?;
        self.active[index] = false;
        Ok(())
    }

    /// Restricts the active set to exactly the given rules.
    pub fn enable_only<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Validate all names before mutating, so a bad name leaves the
        // scanner unchanged.
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect();
        let mut indices = Vec::with_capacity(names.len());
        for name in &names {
            indices.push(self.rule_index(name)?);
        }

        self.active.iter_mut().for_each(|flag| *flag = false);
        for index in indices {
            self.active[index] = true;
        }
        Ok(())
    }

    fn active_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| **active)
            .map(|(rule, _)| rule.as_ref())
    }

    /// All registered rule names, in registration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Currently active rule names, in registration order.
    #[must_use]
    pub fn active_rule_names(&self) -> Vec<&'static str> {
        self.active_rules().map(Rule::name).collect()
    }

    /// Registered rules, for listing.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Scans a block of text, returning findings ordered by input line, then
    /// by rule-registration order within a line. Empty input yields an empty
    /// sequence.
    #[must_use]
    pub fn scan_text(&self, text: &str, file: Option<&str>) -> Vec<A11yMessage> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut messages = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let ctx = LineContext {
                file,
                line: i + 1,
            };
            for rule in self.active_rules().filter(|r| !r.is_text_scope()) {
                messages.extend(rule.check_line(line, &ctx));
            }
        }

        for rule in self.active_rules().filter(|r| r.is_text_scope()) {
            messages.extend(rule.check_text(text, file));
        }

        // Text-scope findings land after the per-line ones; a stable sort by
        // line restores input order without disturbing same-line rule order.
        messages.sort_by_key(A11yMessage::sort_line);

        if self.emit_ok_summary {
            self.append_ok_summary(&mut messages);
        }
        messages
    }

    fn append_ok_summary(&self, messages: &mut Vec<A11yMessage>) {
        let findings: Vec<String> = messages
            .iter()
            .filter_map(|m| m.rule.clone())
            .collect();
        let clean: Vec<&dyn Rule> = self
            .active_rules()
            .filter(|rule| !findings.iter().any(|name| name == rule.name()))
            .collect();
        for rule in clean {
            messages.push(A11yMessage::ok(
                rule.code(),
                &format!("No {} issues found", rule.name()),
                rule.name(),
            ));
        }
    }

    /// Scans raw bytes, rejecting invalid UTF-8 with no partial result.
    pub fn scan_bytes(&self, bytes: &[u8], source_name: &str) -> Result<Vec<A11yMessage>> {
        let text = std::str::from_utf8(bytes).map_err(|_| A11yLintError::Decode {
            source_name: source_name.to_string(),
        })?;
        Ok(self.scan_text(text, Some(source_name)))
    }

    /// Scans a file for accessibility issues.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<A11yMessage>> {
        let bytes = fs::read(path).map_err(|source| A11yLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_bytes(&bytes, &path.display().to_string())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: scan text with the default rule set.
#[must_use]
pub fn scan(text: &str, file: Option<&str>) -> Vec<A11yMessage> {
    Scanner::new().scan_text(text, file)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
