use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user. Schema validation problems are *not* here:
/// they are returned as data (`schema::ValidationIssue`) so that validating a
/// batch of messages can report every problem in one pass.
#[derive(Error, Debug)]
pub enum A11yLintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Input is not valid UTF-8: {source_name}")]
    Decode { source_name: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported schema version: required '{required}', found '{found}'")]
    SchemaVersion { required: String, found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, A11yLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
