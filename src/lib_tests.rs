use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_FINDINGS, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn scan_convenience_uses_default_rules() {
    let messages = scanner::scan("THIS IS BROKEN AND YOU MUST FIX IT NOW", None);
    assert!(messages.iter().any(|m| m.code == "LNG002"));
}
