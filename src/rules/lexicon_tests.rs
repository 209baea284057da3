use super::*;

#[test]
fn jargon_pattern_is_word_bounded() {
    assert!(JARGON_RE.is_match("unexpected EOF reached"));
    assert!(!JARGON_RE.is_match("GEOFENCE active"));
    assert!(JARGON_RE.is_match("write to STDERR"));
}

#[test]
fn ansi_pattern_matches_color_sequences_only() {
    assert!(ANSI_COLOR_RE.is_match("\x1b[31mred\x1b[0m"));
    assert!(ANSI_COLOR_RE.is_match("\x1b[1;32mbold green"));
    assert!(ANSI_COLOR_RE.is_match("\x1b[90mgray"));
    // Reset and style-only sequences are not color.
    assert!(!ANSI_COLOR_RE.is_match("\x1b[0m"));
    assert!(!ANSI_COLOR_RE.is_match("\x1b[1mbold only"));
}

#[test]
fn color_word_phrases() {
    assert!(COLOR_WORD_RE.is_match("failures are shown in red"));
    assert!(COLOR_WORD_RE.is_match("Green indicates success"));
    assert!(COLOR_WORD_RE.is_match("highlighted in yellow"));
    assert!(COLOR_WORD_RE.is_match("rows marked red need attention"));
    assert!(!COLOR_WORD_RE.is_match("the red car"));
}

#[test]
fn status_label_detection() {
    assert!(STATUS_LABEL_RE.is_match("[ERROR] disk full"));
    assert!(STATUS_LABEL_RE.is_match("[ok] fine"));
    assert!(STATUS_LABEL_RE.is_match("build failed"));
    assert!(!STATUS_LABEL_RE.is_match("all quiet here"));
}

#[test]
fn emoji_ranges() {
    assert!(is_emoji('🎉'));
    assert!(is_emoji('✅'));
    assert!(is_emoji('⚠'));
    assert!(!is_emoji('a'));
    assert!(!is_emoji('!'));
}

#[test]
fn status_words_are_case_insensitive() {
    assert!(has_status_word("Build FAILED today"));
    assert!(has_status_word("✅ tests passed"));
    assert!(!has_status_word("✅ tests"));
}
