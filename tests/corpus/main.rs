//! Integration tests for Layer 4: Corpus
//!
//! Tests for the verb corpus, frame matrices, cluster labels, and the
//! frame variant table.

mod fixtures;
mod matrices;

use vnframes_corpus::Corpus;
use vnframes_foundation::{Diagnostics, PrepositionClassHierarchy};
use vnframes_parser::ClassHierarchyLoader;

/// Loads class documents into one corpus, in order.
pub fn corpus_of(documents: &[&str]) -> Corpus {
    let loader = ClassHierarchyLoader::new();
    let mut diagnostics = Diagnostics::new();
    let mut classes = Vec::new();
    for document in documents {
        classes.extend(loader.load_str(document, &mut diagnostics).unwrap());
    }
    Corpus::from_classes(classes)
}

/// The `loc` class used by the `put` frames.
pub fn locations() -> PrepositionClassHierarchy {
    PrepositionClassHierarchy::new().with_class("loc", ["in", "on"])
}
