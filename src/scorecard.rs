//! Scorecard aggregation for accessibility assessments.
//!
//! Grades are derived summaries for reporting, never a gate by themselves:
//! CI gating should key off specific rule codes and error counts, since a
//! letter grade compresses the nuance of individual failures.

use indexmap::IndexMap;
use serde::Serialize;

use crate::message::{A11yMessage, Level};

/// Score penalty per ERROR finding.
pub const ERROR_WEIGHT: u32 = 10;
/// Score penalty per WARN finding.
pub const WARN_WEIGHT: u32 = 3;

/// Configurable score penalties. ERROR must outweigh WARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    pub error_weight: u32,
    pub warn_weight: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            error_weight: ERROR_WEIGHT,
            warn_weight: WARN_WEIGHT,
        }
    }
}

/// Letter grade for a score. Thresholds partition the full [0, 100] range.
#[must_use]
pub const fn grade_for(score: u32) -> char {
    match score {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

/// Per-rule check tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleTally {
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

/// Aggregate view over a finding sequence. Computed once at construction,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub name: String,
    pub overall_score: u32,
    pub overall_grade: char,
    pub is_passing: bool,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
    /// Tallies keyed by rule name, in first-seen order.
    pub rules: IndexMap<String, RuleTally>,
}

impl Scorecard {
    /// Builds a scorecard with explicit weights.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_weights(messages: &[A11yMessage], name: &str, weights: ScoreWeights) -> Self {
        let mut passed = 0usize;
        let mut warnings = 0usize;
        let mut errors = 0usize;
        let mut rules: IndexMap<String, RuleTally> = IndexMap::new();

        for message in messages {
            let rule_name = message.rule.clone().unwrap_or_else(|| "unknown".to_string());
            let tally = rules.entry(rule_name).or_default();
            match message.level {
                Level::Ok => {
                    passed += 1;
                    tally.passed += 1;
                }
                Level::Warn => {
                    warnings += 1;
                    tally.warnings += 1;
                }
                Level::Error => {
                    errors += 1;
                    tally.errors += 1;
                }
            }
        }

        let penalty = (errors as u32).saturating_mul(weights.error_weight)
            + (warnings as u32).saturating_mul(weights.warn_weight);
        let overall_score = 100u32.saturating_sub(penalty);

        Self {
            name: name.to_string(),
            overall_score,
            overall_grade: grade_for(overall_score),
            is_passing: errors == 0,
            passed,
            warnings,
            errors,
            rules,
        }
    }

    #[must_use]
    pub const fn total_checks(&self) -> usize {
        self.passed + self.warnings + self.errors
    }

    /// Deterministic multi-line text summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Accessibility Scorecard: {}", self.name),
            "=".repeat(40),
            format!(
                "Overall Score: {}% ({})",
                self.overall_score, self.overall_grade
            ),
            format!("Total Checks: {}", self.total_checks()),
            format!("  Passed: {}", self.passed),
            format!("  Warnings: {}", self.warnings),
            format!("  Errors: {}", self.errors),
        ];

        if !self.rules.is_empty() {
            lines.push(String::new());
            lines.push("By Rule:".to_string());
            for (name, tally) in &self.rules {
                lines.push(format!(
                    "  {name}: {}P/{}W/{}E",
                    tally.passed, tally.warnings, tally.errors
                ));
            }
        }
        lines.join("\n")
    }
}

/// Creates a scorecard from a finding sequence with the default weights.
///
/// An empty sequence is the clean-scan baseline: score 100, grade A.
#[must_use]
pub fn create_scorecard(messages: &[A11yMessage], name: &str) -> Scorecard {
    Scorecard::with_weights(messages, name, ScoreWeights::default())
}

/// Markdown badge for the score (shields.io).
///
/// Badges are informational only: they do not imply WCAG conformance. The
/// score reflects policy compliance, not accessibility certification.
#[must_use]
pub fn badge_markdown(score: u32, label: &str) -> String {
    let color = match score {
        90.. => "brightgreen",
        70..=89 => "yellow",
        50..=69 => "orange",
        _ => "red",
    };
    format!("![{label}](https://img.shields.io/badge/{label}-{score}%25-{color})")
}

#[cfg(test)]
#[path = "scorecard_tests.rs"]
mod tests;
