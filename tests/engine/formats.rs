//! Integration tests for format derivation

use vnframes_engine::{FormatEngine, FrameFormat, collapse_idioms};
use vnframes_foundation::{Diagnostics, ErrorKind, Logic, SelrestrSet, WarningKind};
use vnframes_model::{Frame, ThematicRole, Token};

use crate::{np, prep, spatial};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn give() -> Frame {
    Frame::new(
        "NP V NP PP.recipient".split_whitespace(),
        vec![
            np("Agent"),
            Token::verb(),
            np("Theme"),
            Token::preposition("to towards").unwrap(),
            np("Recipient"),
        ],
        vec![
            ThematicRole::new("Agent", [SelrestrSet::new(["+animate"], Logic::Unmarked)]),
            ThematicRole::bare("Theme"),
            ThematicRole::new("Recipient", [SelrestrSet::new(["+animate"], Logic::Unmarked)]),
        ],
    )
    .with_class_id("give-13.1")
}

// =============================================================================
// Format names
// =============================================================================

#[test]
fn names_round_trip() {
    for format in FrameFormat::ALL {
        assert_eq!(format.name().parse::<FrameFormat>().unwrap(), format);
        assert_eq!(format.to_string(), format.name());
    }
}

#[test]
fn unknown_names_are_rejected() {
    let err = "gt-xx".parse::<FrameFormat>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownFormat(ref name) if name == "gt-xx"));
}

#[test]
fn dependencies_form_a_dag() {
    assert!(FrameFormat::GtNs.depends_on().is_empty());
    assert!(FrameFormat::ExNs.depends_on().is_empty());
    assert_eq!(FrameFormat::CxTr.depends_on(), &[FrameFormat::CxNs, FrameFormat::GtTr]);
    assert_eq!(
        FrameFormat::ExSt.depends_on(),
        &[FrameFormat::GtTr, FrameFormat::GtSs, FrameFormat::ExNs]
    );
    // canonical order is a topological order
    for format in FrameFormat::ALL {
        let position = FrameFormat::ALL.iter().position(|f| *f == format).unwrap();
        for dependency in format.depends_on() {
            let before = FrameFormat::ALL.iter().position(|f| f == dependency).unwrap();
            assert!(before < position, "{dependency} should precede {format}");
        }
    }
}

#[test]
fn expanded_formats() {
    let expanded: Vec<_> = FrameFormat::ALL
        .into_iter()
        .filter(|f| f.is_expanded())
        .map(FrameFormat::name)
        .collect();
    assert_eq!(expanded, vec!["ex-ns", "ex-ss", "ex-tr", "ex-cx", "et-cx", "ex-st"]);
}

// =============================================================================
// Literal prepositions
// =============================================================================

#[test]
fn literal_values_expand_without_a_hierarchy() {
    let engine = FormatEngine::new();
    let mut diagnostics = Diagnostics::new();
    let rendered = engine.format(&give(), FrameFormat::ExNs, &mut diagnostics).unwrap();
    assert_eq!(
        rendered,
        vec!["NP V NP to NP.recipient", "NP V NP towards NP.recipient"]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn theta_expanded_formats() {
    let engine = FormatEngine::new();
    let mut diagnostics = Diagnostics::new();
    assert_eq!(
        engine.format(&give(), FrameFormat::EtCx, &mut diagnostics).unwrap(),
        vec!["NP.agent V NP.theme to NP.recipient", "NP.agent V NP.theme towards NP.recipient"]
    );
    assert_eq!(
        engine.format(&give(), FrameFormat::ExSt, &mut diagnostics).unwrap(),
        vec![
            "NP.agent+animate V NP.theme to NP.recipient+animate",
            "NP.agent+animate V NP.theme towards NP.recipient+animate",
        ]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn collapsed_expansion_strips_qualifiers() {
    let frame = Frame::new(
        "NP V NP at NP.location".split_whitespace(),
        vec![np("Agent"), Token::verb(), np("Theme"), Token::lexical("at").unwrap(), np("Location")],
        Vec::new(),
    );
    let mut diagnostics = Diagnostics::new();
    let rendered = FormatEngine::new()
        .format(&frame, FrameFormat::ExCx, &mut diagnostics)
        .unwrap();
    assert_eq!(rendered, vec!["NP V NP at NP"]);
}

#[test]
fn negative_restrictions_use_the_complement() {
    let hierarchy = spatial();
    let frame = Frame::new(
        "NP V NP PP.destination".split_whitespace(),
        vec![
            np("Agent"),
            Token::verb(),
            np("Theme"),
            prep(&["-loc"], Logic::Unmarked),
            np("Destination"),
        ],
        Vec::new(),
    );
    let rendered = FormatEngine::with_hierarchy(&hierarchy)
        .format(&frame, FrameFormat::ExNs, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(
        rendered,
        vec!["NP V NP into NP.destination", "NP V NP to NP.destination"]
    );
}

#[test]
fn ground_truth_ignores_the_hierarchy() {
    let frame = Frame::new(
        "NP V NP PP.destination".split_whitespace(),
        vec![np("Agent"), Token::verb(), np("Theme"), prep(&["+loc"], Logic::Unmarked), np("Destination")],
        Vec::new(),
    );
    let mut diagnostics = Diagnostics::new();
    for format in FrameFormat::ALL.into_iter().filter(|f| !f.is_expanded()) {
        let rendered = FormatEngine::new().format(&frame, format, &mut diagnostics).unwrap();
        assert_eq!(rendered.len(), 1, "{format}");
    }
}

// =============================================================================
// Annotation warnings
// =============================================================================

#[test]
fn exhausted_placeholders_warn() {
    let frame = Frame::new(
        "NP V NP NP".split_whitespace(),
        vec![np("Agent"), Token::verb(), np("Theme")],
        vec![ThematicRole::bare("Agent"), ThematicRole::bare("Theme")],
    )
    .with_class_id("bill-54.5");
    let mut diagnostics = Diagnostics::new();
    let engine = FormatEngine::new();

    let roles = engine.format(&frame, FrameFormat::GtTr, &mut diagnostics).unwrap();
    assert_eq!(roles, vec!["NP.agent V NP.theme NP"]);
    let restrictions = engine.format(&frame, FrameFormat::GtSs, &mut diagnostics).unwrap();
    assert_eq!(restrictions, vec!["NP V NP NP"]);

    assert!(diagnostics.count(WarningKind::PlaceholderExhausted) >= 1);
    let warning = &diagnostics.warnings()[0];
    assert_eq!(warning.class_id.as_deref(), Some("bill-54.5"));
    assert_eq!(warning.frame.as_deref(), Some("NP V NP NP"));
}

#[test]
fn unknown_roles_warn() {
    let frame = Frame::new(
        "NP V NP".split_whitespace(),
        vec![np("Agent"), Token::verb(), np("Ghost")],
        vec![ThematicRole::bare("Agent")],
    );
    let mut diagnostics = Diagnostics::new();
    let rendered = FormatEngine::new()
        .format(&frame, FrameFormat::GtSs, &mut diagnostics)
        .unwrap();
    assert_eq!(rendered, vec!["NP V NP"]);
    assert_eq!(diagnostics.count(WarningKind::MissingRole), 1);
}

// =============================================================================
// Idiom collapse
// =============================================================================

#[test]
fn idioms_collapse() {
    assert_eq!(collapse_idioms(words("NP V for NP S")), words("NP V PP S"));
    assert_eq!(collapse_idioms(words("NP V whether S")), words("NP V comp S"));
    assert_eq!(collapse_idioms(words("NP V down NP")), words("NP V PP"));
    assert_eq!(collapse_idioms(words("NP V NP")), words("NP V NP"));
}

#[test]
fn collapsed_format_applies_idioms() {
    let frame = Frame::new(
        "NP V that S".split_whitespace(),
        vec![np("Agent"), Token::verb(), Token::lexical("that").unwrap()],
        Vec::new(),
    );
    let rendered = FormatEngine::new()
        .format(&frame, FrameFormat::CxNs, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(rendered, vec!["NP V comp S"]);
}
