//! Integration tests for the corpus and its matrices

use vnframes_corpus::{FrameMatrix, MatrixRow};
use vnframes_engine::{FormatEngine, FrameFormat};
use vnframes_foundation::Diagnostics;

use crate::fixtures::{GIVE, PUT};
use crate::{corpus_of, locations};

fn matrix(format: FrameFormat, verbs_only: bool) -> FrameMatrix {
    let hierarchy = locations();
    corpus_of(&[GIVE, PUT])
        .to_matrix(
            &FormatEngine::with_hierarchy(&hierarchy),
            format,
            verbs_only,
            &mut Diagnostics::new(),
        )
        .unwrap()
}

// =============================================================================
// Corpus
// =============================================================================

#[test]
fn one_entry_per_member() {
    let corpus = corpus_of(&[GIVE, PUT]);
    let keys: Vec<_> = corpus.entries().iter().map(|e| e.verb.key()).collect();
    assert_eq!(
        keys,
        vec![
            "give#give-13.1",
            "hand#give-13.1",
            "put#put-9.1",
            "place#put-9.1",
            "stash#put-9.1-1",
        ]
    );
    assert_eq!(corpus.get("stash#put-9.1-1").unwrap().frames.len(), 2);
    assert!(corpus.get("stash#put-9.1").is_none());
}

#[test]
fn members_lacking_a_role() {
    let corpus = corpus_of(&[GIVE, PUT]);
    assert_eq!(
        corpus.verbs_lacking_role("Recipient"),
        vec!["put#put-9.1", "place#put-9.1", "stash#put-9.1-1"]
    );
    assert_eq!(corpus.verbs_lacking_role("Topic").len(), 5);
}

#[test]
fn wordnet_senses_are_corrected() {
    let map = corpus_of(&[GIVE, PUT]).wordnet_map();
    assert_eq!(map["give#give-13.1"], vec!["give%2:40:00"]);
    assert_eq!(map["place#put-9.1"], vec!["place%2:35:00"]);
    assert!(map["stash#put-9.1-1"].is_empty());
}

#[test]
fn class_members_group_verbs() {
    let classes = corpus_of(&[GIVE, PUT]).class_members();
    assert_eq!(classes["put-9.1"], vec!["put", "place"]);
    assert_eq!(classes["put-9.1-1"], vec!["stash"]);
    assert!(!classes.contains_key("put-9.1-1-1"));
}

// =============================================================================
// Matrices
// =============================================================================

#[test]
fn ground_truth_matrix() {
    let matrix = matrix(FrameFormat::GtNs, false);
    assert_eq!(
        matrix.columns(),
        &["NP V NP ADV", "NP V NP NP", "NP V NP PP.destination"]
    );
    assert_eq!(matrix.len(), 5);
    assert_eq!(matrix.get("give#give-13.1", "NP V NP NP"), Some(true));
    assert_eq!(matrix.get("give#give-13.1", "NP V NP ADV"), Some(false));
    assert_eq!(matrix.get("put#put-9.1", "NP V NP ADV"), Some(false));
    assert_eq!(matrix.get("stash#put-9.1-1", "NP V NP ADV"), Some(true));
    assert_eq!(matrix.get("stash#put-9.1-1", "NP V NP PP.destination"), Some(true));
    assert_eq!(matrix.get("nobody", "NP V NP NP"), None);
}

#[test]
fn expanded_matrix_has_one_column_per_preposition() {
    let matrix = matrix(FrameFormat::ExCx, false);
    assert_eq!(
        matrix.columns(),
        &["NP V NP ADV", "NP V NP NP", "NP V NP in NP", "NP V NP on NP"]
    );
    assert_eq!(matrix.get("put#put-9.1", "NP V NP on NP"), Some(true));
    assert_eq!(matrix.dot_qualifiers(), Vec::<String>::new());
}

#[test]
fn verbs_only_rows_merge_classes() {
    let corpus = corpus_of(&[GIVE, PUT, GIVE.replace("give-13.1", "give-13.2").as_str()]);
    let matrix = corpus
        .to_matrix(&FormatEngine::new(), FrameFormat::GtNs, true, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(matrix.members(), vec!["give", "hand", "put", "place", "stash"]);
}

#[test]
fn shorten_keeps_the_first_row_per_class() {
    let short = matrix(FrameFormat::GtNs, false).shorten();
    assert_eq!(short.members(), vec!["give-13.1", "put-9.1", "put-9.1-1"]);
    assert_eq!(short.rows()[2].cells, vec![true, false, true]);
}

#[test]
fn gt_ns_lists_its_qualifiers() {
    assert_eq!(matrix(FrameFormat::GtNs, false).dot_qualifiers(), vec!["PP.destination"]);
}

#[test]
fn rows_must_match_columns() {
    let rows = vec![MatrixRow {
        member: "give#give-13.1".to_string(),
        cells: vec![true],
    }];
    assert!(FrameMatrix::new(vec!["a".to_string(), "b".to_string()], rows).is_err());
}

// =============================================================================
// CSV
// =============================================================================

#[test]
fn csv_survives_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vn-gt-ns.csv");
    let matrix = matrix(FrameFormat::GtNs, false);
    matrix.save_csv(&path).unwrap();

    let back = FrameMatrix::load_csv(&path).unwrap();
    assert_eq!(back.columns(), matrix.columns());
    assert_eq!(back.rows(), matrix.rows());
}

#[test]
fn bad_cells_are_rejected() {
    let data = "member,NP V NP\ngive#give-13.1,yes\n";
    let err = FrameMatrix::read_csv(data.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("not 0 or 1"));
}

#[test]
fn missing_files_name_their_path() {
    let err = FrameMatrix::load_csv("/nonexistent/vn-gt-ns.csv").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/vn-gt-ns.csv"));
}
