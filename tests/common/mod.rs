#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the a11y-lint binary.
#[macro_export]
macro_rules! a11y_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("a11y-lint"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an a11y-lint config file in the temp directory.
    pub fn create_config(&self, content: &str) -> std::path::PathBuf {
        self.create_file("a11y-lint.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Output that passes every rule.
pub const CLEAN_OUTPUT: &str = "All 12 tests passed.\nBuild completed in 3.2 seconds.\n";

/// Output with an accessibility error and a warning.
pub const PROBLEM_OUTPUT: &str = "[ERROR] Config file missing.\nThe failing tests are shown in red.\n";

/// A schema-valid message file with one complete message.
pub const VALID_MESSAGE_JSON: &str = r#"{
  "level": "ERROR",
  "code": "A11Y003",
  "what": "Message lacks explanation",
  "why": "Users need context to act",
  "fix": "Add a Why line",
  "rule": "error-structure"
}"#;
