//! Configuration file support (`a11y-lint.toml`).
//!
//! Policy constants live here rather than in rule logic, so defaults can be
//! reviewed and adjusted without touching the rules. Changing a default is a
//! minor-version behavior change.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{A11yLintError, Result};
use crate::rules::RuleSettings;
use crate::scorecard::{ERROR_WEIGHT, ScoreWeights, WARN_WEIGHT};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

const LOCAL_CONFIG_NAME: &str = "a11y-lint.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version; absent means current.
    pub version: Option<String>,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub scorecard: ScorecardConfig,
}

/// Rule selection: `disable` removes rules; a non-empty `enable` switches to
/// allow-list mode (only the listed rules run).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default)]
    pub disable: Vec<String>,
    #[serde(default)]
    pub enable: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    #[serde(default = "default_emoji_threshold")]
    pub emoji_threshold: usize,
    #[serde(default = "default_caps_min_run")]
    pub caps_min_run: usize,
    #[serde(default = "default_caps_ratio")]
    pub caps_ratio: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScorecardConfig {
    #[serde(default = "default_error_weight")]
    pub error_weight: u32,
    #[serde(default = "default_warn_weight")]
    pub warn_weight: u32,
}

const fn default_max_line_length() -> usize {
    120
}
const fn default_emoji_threshold() -> usize {
    2
}
const fn default_caps_min_run() -> usize {
    4
}
const fn default_caps_ratio() -> f64 {
    0.5
}
const fn default_error_weight() -> u32 {
    ERROR_WEIGHT
}
const fn default_warn_weight() -> u32 {
    WARN_WEIGHT
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            emoji_threshold: default_emoji_threshold(),
            caps_min_run: default_caps_min_run(),
            caps_ratio: default_caps_ratio(),
        }
    }
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            error_weight: default_error_weight(),
            warn_weight: default_warn_weight(),
        }
    }
}

impl Config {
    #[must_use]
    pub const fn rule_settings(&self) -> RuleSettings {
        RuleSettings {
            max_line_length: self.limits.max_line_length,
            emoji_threshold: self.limits.emoji_threshold,
            caps_min_run: self.limits.caps_min_run,
            caps_ratio: self.limits.caps_ratio,
        }
    }

    #[must_use]
    pub const fn score_weights(&self) -> ScoreWeights {
        ScoreWeights {
            error_weight: self.scorecard.error_weight,
            warn_weight: self.scorecard.warn_weight,
        }
    }
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(A11yLintError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_version(&config)?;
    Ok(config)
}

/// Loads configuration.
///
/// An explicit path must exist; without one, `a11y-lint.toml` in the current
/// directory is used when present, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).map_err(|source| A11yLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config(&content);
    }

    let local = Path::new(LOCAL_CONFIG_NAME);
    if local.exists() {
        let content = fs::read_to_string(local).map_err(|source| A11yLintError::FileRead {
            path: local.to_path_buf(),
            source,
        })?;
        return parse_config(&content);
    }
    Ok(Config::default())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
