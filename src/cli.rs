use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    #[must_use]
    pub const fn to_mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::Auto,
            Self::Always => ColorMode::Always,
            Self::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "a11y-lint")]
#[command(author, version, about = "Accessibility linter for CLI output")]
#[command(long_about = "Checks that CLI output follows accessible patterns: \
    [OK]/[WARN]/[ERROR] tags with What/Why/Fix structure, no color-only \
    meaning, plain language, and readable formatting.\n\n\
    Exit codes:\n  \
    0 - No findings (or all suppressed)\n  \
    1 - Findings present\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan CLI text for accessibility issues
    Scan(ScanArgs),

    /// Validate a JSON message file against the cli.error.v0.1 schema
    Validate(ValidateArgs),

    /// Generate an accessibility scorecard from scan results
    Scorecard(ScorecardArgs),

    /// Generate a markdown accessibility report
    Report(ReportArgs),

    /// List all available accessibility rules
    ListRules(ListRulesArgs),

    /// Print the CLI error JSON schema
    Schema,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Input file to scan
    pub input: Option<PathBuf>,

    /// Read from stdin instead of a file
    #[arg(long)]
    pub stdin: bool,

    /// Output results as JSON (shorthand for --format json)
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Disable specific rules (can be specified multiple times)
    #[arg(long)]
    pub disable: Vec<String>,

    /// Enable only specific rules (can be specified multiple times)
    #[arg(long)]
    pub enable: Vec<String>,

    /// Treat warnings as errors for exit-code purposes
    #[arg(long)]
    pub strict: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// JSON file containing a message object or an array of them
    pub input: PathBuf,

    /// Show detailed validation errors
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct ScorecardArgs {
    /// Input file to scan
    pub input: Option<PathBuf>,

    /// Read from stdin instead of a file
    #[arg(long)]
    pub stdin: bool,

    /// Name for the scorecard
    #[arg(long, default_value = "CLI Accessibility Assessment")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate a shields.io badge markdown instead of the summary
    #[arg(long)]
    pub badge: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Input file to scan
    pub input: Option<PathBuf>,

    /// Read from stdin instead of a file
    #[arg(long)]
    pub stdin: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report title
    #[arg(long, default_value = "Accessibility Report")]
    pub title: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ListRulesArgs {
    /// Show rule categories and WCAG references
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
