//! Integration tests for ThematicRole merging

use vnframes_foundation::{ErrorKind, Logic, SelrestrSet};
use vnframes_model::ThematicRole;

fn set(label: &str) -> SelrestrSet {
    SelrestrSet::new([label], Logic::Unmarked)
}

#[test]
fn merge_unions_restrictions() {
    let left = ThematicRole::new("Agent", [set("+animate")]);
    let right = ThematicRole::new("Agent", [set("+machine")]);
    let merged = left.merge(&right).unwrap();
    assert_eq!(merged.role_type(), "Agent");
    assert_eq!(merged.selrestrs().len(), 2);
    assert_eq!(merged.selrestr_labels(), vec!["+animate", "+machine"]);
}

#[test]
fn merge_is_idempotent() {
    let role = ThematicRole::new("Agent", [set("+animate")]);
    assert_eq!(role.merge(&role).unwrap(), role);
}

#[test]
fn merge_rejects_different_types() {
    let err = ThematicRole::bare("Agent")
        .merge(&ThematicRole::bare("Theme"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoleMismatch { .. }));
}

#[test]
fn merge_all_keeps_first_seen_order() {
    let merged = ThematicRole::merge_all([
        ThematicRole::new("Theme", [set("+concrete")]),
        ThematicRole::bare("Agent"),
        ThematicRole::new("Theme", [set("+solid")]),
    ]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].role_type(), "Theme");
    assert_eq!(merged[0].selrestrs().len(), 2);
}

#[test]
fn or_sets_render_as_one_label() {
    let role = ThematicRole::new(
        "Agent",
        [SelrestrSet::new(["+machine", "+animate"], Logic::Or)],
    );
    assert_eq!(role.selrestr_labels(), vec!["+OR(+animate+machine)"]);
}
