use super::*;

mod text_blocks {
    use super::*;

    #[test]
    fn bare_error_tag_escalates_to_error() {
        let findings = ErrorStructure.check_text("[ERROR] Config file missing", None);
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.level, Level::Error);
        assert_eq!(finding.code, "A11Y003");
        assert_eq!(finding.what, "Message lacks explanation and fix suggestion");
        assert_eq!(finding.location.as_ref().unwrap().line, Some(1));
    }

    #[test]
    fn why_and_fix_continuations_satisfy_the_block() {
        let text = "[ERROR] Config file missing\n  Why: the path does not exist\n  Fix: create a11y-lint.toml";
        assert!(ErrorStructure.check_text(text, None).is_empty());
    }

    #[test]
    fn inline_keywords_count_as_why_and_fix() {
        let text = "ERROR: build failed because of a syntax error, try running with --verbose";
        assert!(ErrorStructure.check_text(text, None).is_empty());
    }

    #[test]
    fn warn_block_missing_fix_stays_warn() {
        let text = "[WARN] Deprecated flag\n  Why: this option was replaced";
        let findings = ErrorStructure.check_text(text, None);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Level::Warn);
        assert_eq!(findings[0].what, "Message lacks fix suggestion");
    }

    #[test]
    fn error_block_with_only_why_stays_warn() {
        let text = "[ERROR] Disk full\n  Why: no free blocks remain";
        let findings = ErrorStructure.check_text(text, None);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Level::Warn);
    }

    #[test]
    fn untagged_lines_produce_no_blocks() {
        assert!(
            ErrorStructure
                .check_text("just some ordinary output\nanother line", None)
                .is_empty()
        );
    }

    #[test]
    fn continuation_without_block_is_ignored() {
        assert!(ErrorStructure.check_text("  indented but no tag above", None).is_empty());
    }

    #[test]
    fn multiple_blocks_each_reported_with_their_line() {
        let text = "[ERROR] first\nnormal line\nWARN: second";
        let findings = ErrorStructure.check_text(text, None);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].location.as_ref().unwrap().line, Some(1));
        assert_eq!(findings[0].level, Level::Error);
        assert_eq!(findings[1].location.as_ref().unwrap().line, Some(3));
        assert_eq!(findings[1].level, Level::Warn);
    }
}

mod parsed_messages {
    use super::*;

    fn error_without_why_fix() -> A11yMessage {
        A11yMessage::error("A11Y001", "Something broke", "", "", "demo")
    }

    #[test]
    fn ok_messages_are_skipped() {
        let message = A11yMessage::ok("A11Y005", "All good", "demo");
        assert!(check_message(&message).is_none());
    }

    #[test]
    fn complete_message_passes() {
        let message = A11yMessage::warn("A11Y002", "w", "because reasons", "try again", "demo");
        assert!(check_message(&message).is_none());
    }

    #[test]
    fn error_missing_both_escalates() {
        let finding = check_message(&error_without_why_fix()).unwrap();
        assert_eq!(finding.level, Level::Error);
        assert_eq!(finding.code, "A11Y003");
        assert_eq!(finding.metadata["checked_code"], "A11Y001");
        assert!(finding.what.contains("missing 'why' and 'fix'"));
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let message = A11yMessage::warn("A11Y002", "w", "  ", "\t", "demo");
        let finding = check_message(&message).unwrap();
        assert_eq!(finding.level, Level::Warn);
        assert!(finding.what.contains("missing 'why' and 'fix'"));
    }

    #[test]
    fn check_messages_tags_each_finding_with_its_index() {
        let messages = vec![
            A11yMessage::warn("A11Y002", "fine", "because", "try", "demo"),
            error_without_why_fix(),
        ];
        let findings = check_messages(&messages);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].metadata["index"], 1);
    }
}
