//! Building a preposition class reference from a previous run

use vnframes_corpus::OutputLayout;
use vnframes_engine::FrameFormat;
use vnframes_foundation::{Diagnostics, PrepositionClassHierarchy};
use vnframes_runtime::{build_reference, run, save_reference};

use crate::Workspace;

#[test]
fn harvested_reference_drives_the_next_run() {
    let workspace = Workspace::new();
    let config = workspace.config().with_formats(vec![FrameFormat::ExNs]);
    run(&config, &mut Diagnostics::new()).unwrap();

    let columns = OutputLayout::new(&config.out_dir, false).columns(FrameFormat::ExNs);
    let isa = workspace.dir.path().join("preps.txt");
    std::fs::write(&isa, "isa(in,loc)\nisa(on,loc)\nisa(loc,spatial)\n").unwrap();

    let hierarchy = build_reference(Some(&isa), Some(&columns)).unwrap();
    let destination: Vec<_> = hierarchy.literals("destination").unwrap().iter().cloned().collect();
    assert_eq!(destination, vec!["in", "on"]);
    assert!(hierarchy.contains_class("loc"));

    let saved = workspace.dir.path().join("ref/prep_literals.json");
    save_reference(&hierarchy, &saved).unwrap();
    assert_eq!(
        PrepositionClassHierarchy::from_json_file(&saved).unwrap().class_names(),
        hierarchy.class_names()
    );

    let rerun = config.with_selrestr_reference(Some(saved));
    let report = run(&rerun, &mut Diagnostics::new()).unwrap();
    assert_eq!(report.matrices[0].columns, 4);
}
