//! Integration tests for the `validate` command.

mod common;

use common::{TestFixture, VALID_MESSAGE_JSON};
use predicates::prelude::*;

#[test]
fn validate_complete_message_passes() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("messages.json", VALID_MESSAGE_JSON);

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] All 1 message(s) valid"));
}

#[test]
fn validate_array_of_messages() {
    let fixture = TestFixture::new();
    let file = fixture.create_file(
        "messages.json",
        r#"[
            {"level": "OK", "code": "FMT001", "what": "fine"},
            {"level": "WARN", "code": "LNG001", "what": "jargon", "why": "w", "fix": "f"}
        ]"#,
    );

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 message(s) valid"));
}

#[test]
fn validate_schema_violation_exits_with_findings() {
    let fixture = TestFixture::new();
    let file = fixture.create_file(
        "messages.json",
        r#"{"level": "FATAL", "code": "A11Y003", "what": "broken"}"#,
    );

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 schema validation issue(s)"));
}

#[test]
fn validate_verbose_lists_each_issue() {
    let fixture = TestFixture::new();
    let file = fixture.create_file(
        "messages.json",
        r#"[{"level": "OK", "code": "lower1", "what": ""}]"#,
    );

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .arg("--verbose")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Message 0: code:"))
        .stderr(predicate::str::contains("Message 0: what: must not be empty"));
}

#[test]
fn validate_flags_missing_why_fix_structure() {
    // Schema-valid, but an ERROR without why/fix fails the structure check.
    let fixture = TestFixture::new();
    let file = fixture.create_file(
        "messages.json",
        r#"{"level": "ERROR", "code": "CLI001", "what": "Something broke"}"#,
    );

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[ERROR] A11Y003:"))
        .stdout(predicate::str::contains("missing 'why' and 'fix'"));
}

#[test]
fn validate_unsupported_schema_version_exits_config_error() {
    let fixture = TestFixture::new();
    let file = fixture.create_file(
        "messages.json",
        r#"{"level": "OK", "code": "FMT001", "what": "fine", "schema_version": "0.2"}"#,
    );

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported schema version"));
}

#[test]
fn validate_malformed_json_exits_config_error() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("messages.json", "{broken");

    a11y_lint!()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON parse error"));
}

#[test]
fn validate_missing_file_exits_config_error() {
    a11y_lint!()
        .args(["validate", "/nonexistent/messages.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}
