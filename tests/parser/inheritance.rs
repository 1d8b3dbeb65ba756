//! Integration tests for class inheritance

use vnframes_foundation::{Diagnostics, PosKind, WarningKind};
use vnframes_parser::ClassHierarchyLoader;

use crate::fixtures::PUT;

#[test]
fn one_entry_per_node() {
    let mut diagnostics = Diagnostics::new();
    let classes = ClassHierarchyLoader::new()
        .load_str(PUT, &mut diagnostics)
        .unwrap();
    let ids: Vec<_> = classes.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(ids, vec!["put-9.1", "put-9.1-1", "put-9.1-1-1"]);
}

#[test]
fn subclasses_inherit_frames() {
    let classes = ClassHierarchyLoader::new()
        .load_str(PUT, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(classes[0].frames.len(), 1);
    assert_eq!(classes[1].frames.len(), 2);
    assert_eq!(classes[2].frames.len(), 2);
    assert_eq!(classes[1].frames[0].joined(), "NP V NP PP.destination");
    assert_eq!(classes[1].frames[1].joined(), "NP V NP ADV");
    assert_eq!(classes[1].frames[1].class_id(), Some("put-9.1-1"));
}

#[test]
fn inherited_roles_merge() {
    let classes = ClassHierarchyLoader::new()
        .load_str(PUT, &mut Diagnostics::new())
        .unwrap();
    let parent_agent = classes[0].frames[0].role("Agent").unwrap();
    assert_eq!(parent_agent.selrestr_labels(), vec!["+OR(+animate+organization)"]);

    let child_agent = classes[1].frames[1].role("Agent").unwrap();
    assert_eq!(
        child_agent.selrestr_labels(),
        vec!["+OR(+animate+organization)", "+machine"]
    );
}

#[test]
fn members_and_wordnet() {
    let classes = ClassHierarchyLoader::new()
        .load_str(PUT, &mut Diagnostics::new())
        .unwrap();
    let put = &classes[0].members[0];
    assert_eq!(put.key(), "put#put-9.1");
    assert_eq!(put.wordnet, vec!["put%2:35:00"]);
    assert_eq!(put.grouping.as_deref(), Some("put.01"));
    assert!(classes[1].members[0].wordnet.is_empty());
}

#[test]
fn syntax_tokens() {
    let classes = ClassHierarchyLoader::new()
        .load_str(PUT, &mut Diagnostics::new())
        .unwrap();
    let syntax = classes[0].frames[0].syntax();
    let kinds: Vec<_> = syntax.iter().map(|t| t.pos()).collect();
    assert_eq!(
        kinds,
        vec![
            PosKind::NounPhrase,
            PosKind::Verb,
            PosKind::NounPhrase,
            PosKind::Preposition,
            PosKind::NounPhrase
        ]
    );
    assert_eq!(syntax[3].selrestrs().labels(), &["+loc"]);
}

#[test]
fn empty_subclass_is_reported() {
    let mut diagnostics = Diagnostics::new();
    ClassHierarchyLoader::new()
        .load_str(PUT, &mut diagnostics)
        .unwrap();
    assert_eq!(diagnostics.count(WarningKind::MemberlessClass), 1);
    let warning = &diagnostics.warnings()[0];
    assert_eq!(warning.class_id.as_deref(), Some("put-9.1-1-1"));
}
