//! Property tests for derivation

use std::collections::HashSet;

use proptest::prelude::*;
use vnframes_engine::{FormatEngine, FrameFormat, normalize_all};
use vnframes_foundation::{Diagnostics, Logic, PrepositionClassHierarchy, WarningKind};
use vnframes_model::{Frame, Token};

use crate::{np, prep};

/// A frame with one restricted `PP` per entry of `sizes`, each licensing a
/// disjoint class of that many literals.
fn restricted_frame(sizes: &[usize]) -> (Frame, PrepositionClassHierarchy) {
    let mut hierarchy = PrepositionClassHierarchy::new();
    let mut primary = vec!["NP".to_string(), "V".to_string()];
    let mut syntax = vec![np("Agent"), Token::verb()];
    for (i, &size) in sizes.iter().enumerate() {
        let class = format!("class{i}");
        hierarchy.insert(class.clone(), (0..size).map(|j| format!("p{i}x{j}")));
        primary.push(format!("PP.role{i}"));
        syntax.push(prep(&[format!("+{class}").as_str()], Logic::Unmarked));
        syntax.push(np(&format!("Role{i}")));
    }
    (Frame::new(primary, syntax, Vec::new()), hierarchy)
}

fn placeholder() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NP".to_string()),
        Just("V".to_string()),
        "NP\\.[a-z]{1,8}",
        "PP\\.[a-z]{1,8}",
        "S_[A-Z]{2,3}",
        "ADVP(-[A-Z][a-z]{1,6})?",
        "[a-z]{2,6}",
    ]
}

proptest! {
    #[test]
    fn ground_truth_is_the_primary(tokens in prop::collection::vec(placeholder(), 1..8)) {
        let frame = Frame::new(tokens.clone(), vec![Token::verb()], Vec::new());
        let rendered = FormatEngine::new()
            .format(&frame, FrameFormat::GtNs, &mut Diagnostics::new())
            .unwrap();
        prop_assert_eq!(rendered, vec![tokens.join(" ")]);
    }

    #[test]
    fn expansion_count_is_the_product(sizes in prop::collection::vec(1usize..4, 0..4)) {
        let (frame, hierarchy) = restricted_frame(&sizes);
        let mut diagnostics = Diagnostics::new();
        let rendered = FormatEngine::with_hierarchy(&hierarchy)
            .format(&frame, FrameFormat::ExNs, &mut diagnostics)
            .unwrap();

        let expected: usize = sizes.iter().product();
        prop_assert_eq!(rendered.len(), expected);
        prop_assert_eq!(rendered.iter().collect::<HashSet<_>>().len(), expected);
        prop_assert_eq!(diagnostics.count(WarningKind::UnplacedLiteral), 0);
        prop_assert_eq!(diagnostics.count(WarningKind::MissingLiteral), 0);
    }

    #[test]
    fn expanded_strings_grow_by_one_word_per_preposition(sizes in prop::collection::vec(1usize..3, 1..4)) {
        let (frame, hierarchy) = restricted_frame(&sizes);
        let rendered = FormatEngine::with_hierarchy(&hierarchy)
            .format(&frame, FrameFormat::ExNs, &mut Diagnostics::new())
            .unwrap();
        for expanded in rendered {
            prop_assert_eq!(
                expanded.split_whitespace().count(),
                frame.primary().len() + sizes.len()
            );
        }
    }

    #[test]
    fn normalization_is_idempotent(tokens in prop::collection::vec(placeholder(), 0..8)) {
        let once = normalize_all(&tokens).unwrap();
        prop_assert_eq!(normalize_all(&once).unwrap(), once.clone());
    }
}
