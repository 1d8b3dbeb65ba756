//! Integration tests for the diagnostics channel

use vnframes_foundation::{DataQualityWarning, Diagnostics, WarningKind};

#[test]
fn warnings_are_deduplicated() {
    let mut diagnostics = Diagnostics::new();
    let warning = DataQualityWarning::new(WarningKind::MemberlessClass, "no members")
        .with_class("give-13.1");
    assert!(diagnostics.push(warning.clone()));
    assert!(!diagnostics.push(warning));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn summary_counts_by_kind() {
    let mut diagnostics = Diagnostics::new();
    for class in ["a-1", "b-2"] {
        diagnostics.push(
            DataQualityWarning::new(WarningKind::FramelessClass, "no frames").with_class(class),
        );
    }
    diagnostics.push(
        DataQualityWarning::new(WarningKind::TokenCountMismatch, "3 != 4").with_frame("NP V NP"),
    );

    assert_eq!(diagnostics.count(WarningKind::FramelessClass), 2);
    let summary = diagnostics.summary();
    assert_eq!(summary[&WarningKind::FramelessClass], 2);
    assert_eq!(summary[&WarningKind::TokenCountMismatch], 1);
    assert!(!summary.contains_key(&WarningKind::EmptyClass));
}

#[test]
fn extend_merges_channels() {
    let mut outer = Diagnostics::new();
    let mut inner = Diagnostics::new();
    inner.push(DataQualityWarning::new(WarningKind::EmptyClass, "empty").with_class("x-1"));
    outer.extend(inner);
    assert_eq!(outer.into_warnings().len(), 1);
}

#[test]
fn warning_display_names_class_and_frame() {
    let warning = DataQualityWarning::new(WarningKind::PlaceholderExhausted, "no NP left")
        .with_class("put-9.1")
        .with_frame("NP V NP PP");
    let text = warning.to_string();
    assert!(text.contains("put-9.1"));
    assert!(text.contains("no NP left"));
}
