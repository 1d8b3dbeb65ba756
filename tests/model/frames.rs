//! Integration tests for Frame

use std::collections::HashSet;

use vnframes_foundation::{Logic, SelrestrSet};
use vnframes_model::{Frame, ThematicRole, Token, VerbEntry, correct_primary, correct_wn_sense};

fn np(role: &str) -> Token {
    Token::noun_phrase(role, SelrestrSet::empty(), Vec::new()).unwrap()
}

fn give(class_id: &str) -> Frame {
    Frame::from_description(
        "NP V NP PP.recipient",
        vec![
            np("Agent"),
            Token::verb(),
            np("Theme"),
            Token::preposition("to").unwrap(),
            np("Recipient"),
        ],
        vec![
            ThematicRole::bare("Theme"),
            ThematicRole::bare("Agent"),
            ThematicRole::bare("Recipient"),
        ],
        Some(class_id),
    )
}

#[test]
fn primary_is_split() {
    let frame = give("give-13.1");
    assert_eq!(frame.primary().len(), 4);
    assert_eq!(frame.joined(), "NP V NP PP.recipient");
    assert_eq!(frame.class_id(), Some("give-13.1"));
}

#[test]
fn roles_are_sorted() {
    let frame = give("give-13.1");
    let types: Vec<_> = frame.roles().iter().map(ThematicRole::role_type).collect();
    assert_eq!(types, vec!["Agent", "Recipient", "Theme"]);
    assert!(frame.has_role("Recipient"));
    assert!(!frame.has_role("Topic"));
}

#[test]
fn equality_ignores_class() {
    let mut set = HashSet::new();
    set.insert(give("give-13.1"));
    set.insert(give("give-13.1-1"));
    assert_eq!(set.len(), 1);
}

#[test]
fn noun_phrase_cursor() {
    let frame = give("give-13.1");
    assert_eq!(frame.noun_phrase_from(0).map(|(i, _)| i), Some(0));
    assert_eq!(frame.noun_phrase_from(1).map(|(i, _)| i), Some(2));
    assert_eq!(frame.noun_phrase_from(3).map(|(i, t)| (i, t.value())), Some((4, Some("Recipient"))));
    assert!(frame.noun_phrase_from(5).is_none());
}

#[test]
fn prepositional_tokens_in_order() {
    let frame = Frame::new(
        "NP V NP as NP".split_whitespace(),
        vec![
            np("Agent"),
            Token::verb(),
            np("Theme"),
            Token::lexical("as").unwrap(),
            Token::restricted_preposition(SelrestrSet::new(["+loc"], Logic::Unmarked)).unwrap(),
        ],
        Vec::new(),
    );
    assert_eq!(frame.prepositional_tokens().count(), 2);
}

#[test]
fn passive_frame() {
    assert!(Frame::new(["Passive"], Vec::new(), Vec::new()).is_passive());
    assert!(!give("give-13.1").is_passive());
}

#[test]
fn description_is_corrected() {
    let frame = Frame::from_description("NP v", vec![np("Agent"), Token::verb()], Vec::new(), None);
    assert_eq!(frame.joined(), "NP V");
}

#[test]
fn class_qualified_corrections() {
    assert_eq!(
        correct_primary("NP.location V NP.theme", Some("sound_existence-47.4")),
        "NP.location V PP.theme"
    );
    assert_eq!(correct_primary("NP.location V NP.theme", Some("other-1")), "NP.location V NP.theme");
    assert_eq!(correct_primary("NP.location V NP.theme", None), "NP.location V NP.theme");
}

#[test]
fn wordnet_corrections() {
    assert_eq!(correct_wn_sense("?give%2:40:00"), "give%2:40:00");
    assert_eq!(correct_wn_sense("moult%2:39:00"), "molt%2:29:00");
    assert_eq!(correct_wn_sense("give%2:40:00"), "give%2:40:00");
}

#[test]
fn verb_entry_key() {
    let entry = VerbEntry::new("give", "give-13.1").with_grouping("give.01");
    assert_eq!(entry.key(), "give#give-13.1");
    assert_eq!(entry.grouping.as_deref(), Some("give.01"));
}
