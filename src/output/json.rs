use serde::Serialize;

use crate::error::Result;
use crate::message::{A11yMessage, Level};

use super::OutputFormatter;

/// JSON document: scanned source, the messages themselves, and level counts.
pub struct JsonFormatter {
    source: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    messages: &'a [A11yMessage],
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, messages: &[A11yMessage]) -> Result<String> {
        let output = JsonOutput {
            source: &self.source,
            messages,
            summary: Summary {
                total: messages.len(),
                errors: messages.iter().filter(|m| m.level == Level::Error).count(),
                warnings: messages.iter().filter(|m| m.level == Level::Warn).count(),
            },
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
