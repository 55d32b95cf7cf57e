use super::*;
use pretty_assertions::assert_eq;

fn at(file: &str, line: u32, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(message)
        .with_label(SourceLocation::new(file, line, 1), "here")
}

#[test]
fn test_flush_sorts_by_location() {
    let mut queue = DiagnosticQueue::new();
    queue.add(at("src/b.rs", 1, "b1"));
    queue.add(at("src/a.rs", 9, "a9"));
    queue.add(at("src/a.rs", 2, "a2"));
    queue.add(Diagnostic::warning(ErrorCode::W1001).with_message("unanchored"));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["unanchored", "a2", "a9", "b1"]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn test_identical_diagnostics_are_deduplicated() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(at("src/a.rs", 1, "same")));
    assert!(!queue.add(at("src/a.rs", 1, "same")));
    assert!(queue.add(at("src/a.rs", 1, "different")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_no_dedup_when_disabled() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(at("src/a.rs", 1, "same")));
    assert!(queue.add(at("src/a.rs", 1, "same")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    assert!(queue.add(at("src/a.rs", 1, "one")));
    assert!(!queue.limit_reached());
    assert!(queue.add(at("src/a.rs", 2, "two")));
    assert!(!queue.limit_reached());
    assert!(!queue.add(at("src/a.rs", 3, "three")));
    assert!(queue.limit_reached());
    // Warnings still get through.
    assert!(queue.add(Diagnostic::warning(ErrorCode::W1001).with_message("w")));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.warning_count(), 1);
}

#[test]
fn test_has_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    queue.add(Diagnostic::warning(ErrorCode::W1001).with_message("w"));
    assert!(queue.has_errors().is_none());
    queue.add(at("src/a.rs", 1, "boom"));
    assert!(queue.has_errors().is_some());
}

#[test]
fn test_exactly_limit_errors_drops_nothing() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 3,
        deduplicate: true,
    });
    for line in 1..=3 {
        assert!(queue.add(at("src/a.rs", line, "err")));
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.flush().len(), 3);

    for line in 1..=4 {
        queue.add(at("src/a.rs", line, "err"));
    }
    assert!(queue.limit_reached());
    assert_eq!(queue.flush().len(), 3);
    assert!(!queue.limit_reached());
}

#[test]
fn test_too_many_errors() {
    let diag = too_many_errors(50);
    assert_eq!(diag.code, ErrorCode::E9002);
    assert!(diag.message.contains("50"));
}
