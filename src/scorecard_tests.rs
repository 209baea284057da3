use super::*;

fn warn(rule: &str) -> A11yMessage {
    A11yMessage::warn("FMT001", "too long", "why", "fix", rule)
}

fn error(rule: &str) -> A11yMessage {
    A11yMessage::error("CLR001", "color only", "why", "fix", rule)
}

fn ok(rule: &str) -> A11yMessage {
    A11yMessage::ok("FMT001", "clean", rule)
}

#[test]
fn empty_input_is_the_clean_baseline() {
    let card = create_scorecard(&[], "Empty");
    assert_eq!(card.overall_score, 100);
    assert_eq!(card.overall_grade, 'A');
    assert!(card.is_passing);
    assert_eq!(card.total_checks(), 0);
    assert!(card.rules.is_empty());
}

#[test]
fn weighted_subtraction_scoring() {
    // 2 errors and 3 warnings with default weights: 100 - (2*10 + 3*3) = 71.
    let messages = vec![
        error("no-color-only"),
        error("error-structure"),
        warn("line-length"),
        warn("line-length"),
        warn("plain-language"),
    ];
    let card = create_scorecard(&messages, "Demo");
    assert_eq!(card.overall_score, 71);
    assert_eq!(card.overall_grade, 'C');
    assert!(!card.is_passing);
    assert_eq!(card.errors, 2);
    assert_eq!(card.warnings, 3);
}

#[test]
fn score_floors_at_zero() {
    let messages: Vec<A11yMessage> = (0..20).map(|_| error("no-color-only")).collect();
    let card = create_scorecard(&messages, "Bad");
    assert_eq!(card.overall_score, 0);
    assert_eq!(card.overall_grade, 'F');
}

#[test]
fn adding_an_error_never_raises_the_score() {
    let mut messages = vec![warn("line-length")];
    let mut previous = create_scorecard(&messages, "Mono").overall_score;
    for _ in 0..15 {
        messages.push(error("no-color-only"));
        let score = create_scorecard(&messages, "Mono").overall_score;
        assert!(score <= previous);
        previous = score;
    }
}

#[test]
fn custom_weights_apply() {
    let weights = ScoreWeights {
        error_weight: 25,
        warn_weight: 5,
    };
    let card = Scorecard::with_weights(&[error("a"), warn("b")], "Custom", weights);
    assert_eq!(card.overall_score, 70);
    assert_eq!(card.overall_grade, 'C');
}

#[test]
fn grade_boundaries() {
    assert_eq!(grade_for(100), 'A');
    assert_eq!(grade_for(90), 'A');
    assert_eq!(grade_for(89), 'B');
    assert_eq!(grade_for(80), 'B');
    assert_eq!(grade_for(79), 'C');
    assert_eq!(grade_for(70), 'C');
    assert_eq!(grade_for(69), 'D');
    assert_eq!(grade_for(60), 'D');
    assert_eq!(grade_for(59), 'F');
    assert_eq!(grade_for(0), 'F');
}

#[test]
fn passing_tracks_errors_not_score() {
    // 11 warnings: score 67 (D) but no errors, so still passing.
    let messages: Vec<A11yMessage> = (0..11).map(|_| warn("line-length")).collect();
    let card = create_scorecard(&messages, "Warned");
    assert_eq!(card.overall_score, 67);
    assert!(card.is_passing);
}

#[test]
fn per_rule_tallies_in_first_seen_order() {
    let messages = vec![
        warn("line-length"),
        ok("punctuation"),
        error("no-color-only"),
        warn("line-length"),
    ];
    let card = create_scorecard(&messages, "Tally");
    let names: Vec<&str> = card.rules.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["line-length", "punctuation", "no-color-only"]);
    assert_eq!(
        card.rules["line-length"],
        RuleTally {
            passed: 0,
            warnings: 2,
            errors: 0
        }
    );
    assert_eq!(card.rules["punctuation"].passed, 1);
}

#[test]
fn messages_without_rule_group_under_unknown() {
    let mut message = warn("x");
    message.rule = None;
    let card = create_scorecard(&[message], "Anon");
    assert!(card.rules.contains_key("unknown"));
}

#[test]
fn summary_is_deterministic_and_complete() {
    let messages = vec![ok("line-length"), warn("punctuation")];
    let card = create_scorecard(&messages, "CLI Accessibility Assessment");
    let summary = card.summary();
    assert!(summary.starts_with("Accessibility Scorecard: CLI Accessibility Assessment"));
    assert!(summary.contains("Overall Score: 97% (A)"));
    assert!(summary.contains("Total Checks: 2"));
    assert!(summary.contains("  line-length: 1P/0W/0E"));
    assert!(summary.contains("  punctuation: 0P/1W/0E"));
    assert_eq!(summary, card.summary());
}

#[test]
fn badge_color_bands() {
    assert!(badge_markdown(95, "a11y").contains("-brightgreen"));
    assert!(badge_markdown(75, "a11y").contains("-yellow"));
    assert!(badge_markdown(55, "a11y").contains("-orange"));
    assert!(badge_markdown(30, "a11y").contains("-red"));
    assert_eq!(
        badge_markdown(100, "a11y"),
        "![a11y](https://img.shields.io/badge/a11y-100%25-brightgreen)"
    );
}
