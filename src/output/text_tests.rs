use super::*;
use crate::message::Location;

fn warn_message() -> A11yMessage {
    A11yMessage::warn(
        "FMT001",
        "Line 3 is 130 characters long",
        "Long lines are hard to read",
        "Wrap at 120 characters",
        "line-length",
    )
    .with_location(Location::new(Some("out.log"), 3))
}

#[test]
fn canonical_form_without_colors() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let rendered = formatter.render_message(&warn_message());
    assert_eq!(
        rendered,
        "[WARN] FMT001: Line 3 is 130 characters long\n\
         \x20 at out.log:line 3\n\
         \x20 Why: Long lines are hard to read\n\
         \x20 Fix: Wrap at 120 characters"
    );
}

#[test]
fn ok_message_renders_without_why_fix() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let message = A11yMessage::ok("FMT001", "No line-length issues found", "line-length");
    assert_eq!(
        formatter.render_message(&message),
        "[OK] FMT001: No line-length issues found"
    );
}

#[test]
fn always_mode_wraps_level_in_color() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let rendered = formatter.render_message(&warn_message());
    assert!(rendered.contains("\x1b[33m"));
    assert!(rendered.contains("\x1b[0m"));
    // The textual level survives colorization.
    assert!(rendered.contains("[WARN]"));
}

#[test]
fn format_ends_with_the_summary_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter.format(&[warn_message()]).unwrap();
    assert!(output.ends_with("\n1 warning(s)\n"));
}

#[test]
fn format_of_empty_sequence_is_just_the_summary() {
    let formatter = TextFormatter::new(ColorMode::Never);
    assert_eq!(formatter.format(&[]).unwrap(), "No issues found\n");
}

#[test]
fn summary_line_counts_each_level() {
    let messages = vec![
        A11yMessage::ok("FMT001", "fine", "line-length"),
        A11yMessage::ok("LNG003", "fine", "punctuation"),
        warn_message(),
        A11yMessage::error("CLR001", "color only", "why", "fix", "no-color-only"),
    ];
    assert_eq!(summary_line(&messages), "2 passed, 1 warning(s), 1 error(s)");
}

#[test]
fn summary_line_omits_zero_counts() {
    assert_eq!(summary_line(&[warn_message()]), "1 warning(s)");
    assert_eq!(summary_line(&[]), "No issues found");
}
