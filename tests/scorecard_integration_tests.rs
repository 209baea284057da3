//! Integration tests for the `scorecard` command.

mod common;

use common::{CLEAN_OUTPUT, PROBLEM_OUTPUT, TestFixture};
use predicates::prelude::*;

#[test]
fn scorecard_clean_input_is_a_grade() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("out.txt", CLEAN_OUTPUT);

    a11y_lint!()
        .arg("scorecard")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall Score: 100% (A)"))
        .stdout(predicate::str::contains(
            "Accessibility Scorecard: CLI Accessibility Assessment",
        ));
}

#[test]
fn scorecard_counts_passed_rules() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("out.txt", CLEAN_OUTPUT);

    // All 8 rules pass, each contributing one OK entry.
    a11y_lint!()
        .arg("scorecard")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Checks: 8"))
        .stdout(predicate::str::contains("  Passed: 8"));
}

#[test]
fn scorecard_errors_fail_and_lower_the_score() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("out.txt", PROBLEM_OUTPUT);

    // 2 errors with default weights: 100 - 20 = 80.
    a11y_lint!()
        .arg("scorecard")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall Score: 80% (B)"))
        .stdout(predicate::str::contains("  Errors: 2"));
}

#[test]
fn scorecard_custom_name() {
    a11y_lint!()
        .args(["scorecard", "--stdin", "--name", "Release Gate"])
        .write_stdin(CLEAN_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Accessibility Scorecard: Release Gate"));
}

#[test]
fn scorecard_json_output() {
    let output = a11y_lint!()
        .args(["scorecard", "--stdin", "--json"])
        .write_stdin(PROBLEM_OUTPUT)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(value["overall_score"], 80);
    assert_eq!(value["overall_grade"], "B");
    assert_eq!(value["is_passing"], false);
    assert_eq!(value["errors"], 2);
    assert_eq!(value["rules"]["no-color-only"]["errors"], 1);
}

#[test]
fn scorecard_badge_output() {
    a11y_lint!()
        .args(["scorecard", "--stdin", "--badge"])
        .write_stdin(CLEAN_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "![a11y](https://img.shields.io/badge/a11y-100%25-brightgreen)",
        ));
}

#[test]
fn scorecard_weights_come_from_config() {
    let fixture = TestFixture::new();
    let config = fixture.create_config("[scorecard]\nerror_weight = 50\nwarn_weight = 1\n");
    let file = fixture.create_file("out.txt", PROBLEM_OUTPUT);

    // 2 errors at weight 50 floor the score.
    a11y_lint!()
        .arg("scorecard")
        .arg(&file)
        .arg("-c")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall Score: 0% (F)"));
}

#[test]
fn scorecard_honors_config_rule_selection() {
    let fixture = TestFixture::new();
    let config = fixture.create_config("[rules]\ndisable = [\"no-color-only\"]\n");
    let file = fixture.create_file("out.txt", "The result is shown in red.\n");

    // With the color rule disabled the scan is clean and the command passes.
    a11y_lint!()
        .arg("scorecard")
        .arg(&file)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall Score: 100% (A)"))
        .stdout(predicate::str::contains("  Errors: 0"))
        .stdout(predicate::str::contains("no-color-only").not());
}

#[test]
fn scorecard_deterministic_output() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("out.txt", PROBLEM_OUTPUT);

    let run = || {
        a11y_lint!()
            .arg("scorecard")
            .arg(&file)
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}
