//! Integration tests for file and directory loading

use std::fs;

use vnframes_foundation::{Diagnostics, ErrorKind};
use vnframes_model::NounPhraseRule;
use vnframes_parser::{ClassHierarchyLoader, class_files};

use crate::fixtures::{BOTH_RESTRICTIONS, GIVE, PUT};

#[test]
fn directory_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("put-9.1.xml"), PUT).unwrap();
    fs::write(dir.path().join("give-13.1.xml"), GIVE).unwrap();
    fs::write(dir.path().join("README.txt"), "not a class").unwrap();

    let files = class_files(dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let report = ClassHierarchyLoader::new()
        .load_dir(dir.path(), &mut Diagnostics::new())
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.files_loaded, 2);
    assert_eq!(report.classes[0].class_id, "give-13.1");
    assert_eq!(report.classes.len(), 4);
}

#[test]
fn bad_file_is_isolated() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("give-13.1.xml"), GIVE).unwrap();
    fs::write(dir.path().join("broken.xml"), "<VNCLASS ID=\"x-1\"><MEMBERS>").unwrap();
    fs::write(dir.path().join("wrong-root.xml"), "<FOO/>").unwrap();

    let report = ClassHierarchyLoader::new()
        .load_dir(dir.path(), &mut Diagnostics::new())
        .unwrap();
    assert!(!report.is_complete());
    assert_eq!(report.files_loaded, 1);
    assert_eq!(report.failures.len(), 2);
    let (path, err) = &report.failures[0];
    assert!(path.ends_with("broken.xml"));
    assert!(err.context.as_ref().and_then(|c| c.source.as_ref()).is_some());
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = ClassHierarchyLoader::new().load_dir(dir.path().join("nope"), &mut Diagnostics::new());
    assert!(matches!(result.unwrap_err().kind, ErrorKind::Io { .. }));
}

#[test]
fn noun_phrase_rule_is_configurable() {
    let strict = ClassHierarchyLoader::new().load_str(BOTH_RESTRICTIONS, &mut Diagnostics::new());
    assert!(strict.unwrap_err().is_structural());

    let classes = ClassHierarchyLoader::new()
        .with_noun_phrase_rule(NounPhraseRule::Permissive)
        .load_str(BOTH_RESTRICTIONS, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(classes[0].frames[0].syntax()[2].synrestrs(), &["+that_comp"]);
}

#[test]
fn missing_required_element() {
    let xml = r#"<VNCLASS ID="x-1"><MEMBERS/></VNCLASS>"#;
    let err = ClassHierarchyLoader::new()
        .load_str(xml, &mut Diagnostics::new())
        .unwrap_err();
    assert!(err.is_structural());
}
