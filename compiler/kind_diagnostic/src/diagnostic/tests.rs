use super::*;

fn loc(line: u32) -> SourceLocation {
    SourceLocation::new("src/data.rs", line, 1)
}

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("test error")
        .with_label(loc(3), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_location_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E2005)
        .with_secondary_label(loc(1), "first tagged here")
        .with_label(loc(9), "tagged again here");

    assert_eq!(diag.primary_location(), Some(&loc(9)));
}

#[test]
fn test_label_at_without_location() {
    let diag = Diagnostic::error(ErrorCode::E2002).with_label_at(None, "ignored");
    assert!(diag.labels.is_empty());
    assert_eq!(diag.primary_location(), None);

    let diag = Diagnostic::error(ErrorCode::E2002).with_label_at(Some(&loc(4)), "declared here");
    assert_eq!(diag.primary_location(), Some(&loc(4)));
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("test error")
        .with_label(loc(2), "primary")
        .with_secondary_label(loc(8), "secondary")
        .with_note("a note")
        .with_suggestion("a suggestion");

    let output = diag.to_string();
    assert!(output.contains("error [E2002]: test error"));
    assert!(output.contains("--> src/data.rs:2:1: primary"));
    assert!(output.contains("secondary"));
    assert!(output.contains("= note: a note"));
    assert!(output.contains("= help: a suggestion"));
}

#[test]
fn test_warning_severity() {
    let diag = Diagnostic::warning(ErrorCode::W1001).with_message("nothing to do");
    assert!(diag.is_warning());
    assert!(!diag.is_error());
    assert!(diag.to_string().starts_with("warning [W1001]"));
}
