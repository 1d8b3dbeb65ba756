//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use vnframes_foundation::{Error, ErrorKind, Logic, PosKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_structural() {
    let err = Error::structural("FRAME", "missing <SYNTAX>");
    assert!(err.is_structural());
    let msg = format!("{err}");
    assert!(msg.contains("FRAME"));
    assert!(msg.contains("missing <SYNTAX>"));
}

#[test]
fn error_invalid_token() {
    let err = Error::invalid_token(PosKind::Verb, "verbs take no value");
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidToken {
            pos: PosKind::Verb,
            ..
        }
    ));
}

#[test]
fn error_restriction_resolution() {
    let labels = vec!["+animate".to_string(), "+machine".to_string()];
    let err = Error::restriction_resolution(&labels, Logic::And, "empty intersection");
    match &err.kind {
        ErrorKind::RestrictionResolution { labels, logic, .. } => {
            assert_eq!(labels.len(), 2);
            assert_eq!(*logic, Logic::And);
        }
        other => panic!("unexpected kind {other:?}"),
    }
    let msg = format!("{err}");
    assert!(msg.contains("+machine"));
    assert!(msg.contains("empty intersection"));
}

#[test]
fn error_unknown_format() {
    let err = Error::unknown_format("zz-top");
    assert!(matches!(err.kind, ErrorKind::UnknownFormat(ref name) if name == "zz-top"));
    assert!(format!("{err}").contains("zz-top"));
}

#[test]
fn error_role_mismatch() {
    let err = Error::role_mismatch("Agent", "Theme");
    let msg = format!("{err}");
    assert!(msg.contains("Agent"));
    assert!(msg.contains("Theme"));
}

#[test]
fn error_io() {
    let err = Error::io("new_vn/give-13.1.xml", "No such file");
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(format!("{err}").contains("give-13.1.xml"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_appears_in_display() {
    let err = Error::internal("boom")
        .in_frame("NP V NP")
        .in_class("give-13.1")
        .in_source("give-13.1.xml");
    let msg = format!("{err}");
    assert!(msg.contains("NP V NP"));
    assert!(msg.contains("give-13.1"));
}

#[test]
fn innermost_class_and_frame_win() {
    let err = Error::internal("boom")
        .in_class("give-13.1-1")
        .in_class("give-13.1")
        .in_frame("NP V")
        .in_frame("NP V NP");
    let context = err.context.unwrap();
    assert_eq!(context.class_id.as_deref(), Some("give-13.1-1"));
    assert_eq!(context.frame.as_deref(), Some("NP V"));
}

#[test]
fn stages_render_outermost_first() {
    let err = Error::internal("boom")
        .via("gt-ss")
        .via("ex-st")
        .in_frame("NP V NP");
    assert_eq!(err.context.as_ref().unwrap().stack, vec!["ex-st", "gt-ss"]);
    assert_eq!(
        err.to_string(),
        "internal error: boom (frame 'NP V NP', via ex-st > gt-ss)"
    );
}

#[test]
fn error_without_context() {
    let err = Error::invalid_class_id("give");
    assert!(err.context.is_none());
    assert_eq!(format!("{err}"), "invalid class id: give");
}
