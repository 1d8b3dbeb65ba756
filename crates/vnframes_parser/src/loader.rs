//! Class hierarchy loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use vnframes_foundation::{Diagnostics, Error, Result};
use vnframes_model::NounPhraseRule;

use crate::class_node::{ClassFrames, ClassNode};
use crate::xml::Element;

/// The root element name of a class file.
pub const ROOT_ELEMENT: &str = "VNCLASS";

/// Result of loading a directory of class files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// One entry per class node, across every file that loaded.
    pub classes: Vec<ClassFrames>,
    /// Files that failed to load, with the reason.
    pub failures: Vec<(PathBuf, Error)>,
    /// Number of files that loaded.
    pub files_loaded: usize,
}

impl LoadReport {
    /// Returns true if every file loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads class files into flat (members, frames) entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassHierarchyLoader {
    noun_phrase_rule: NounPhraseRule,
}

impl ClassHierarchyLoader {
    /// Creates a loader that enforces the exclusive noun phrase rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how noun phrase restrictions are checked.
    #[must_use]
    pub fn with_noun_phrase_rule(mut self, rule: NounPhraseRule) -> Self {
        self.noun_phrase_rule = rule;
        self
    }

    /// Returns the noun phrase rule in effect.
    #[must_use]
    pub fn noun_phrase_rule(&self) -> NounPhraseRule {
        self.noun_phrase_rule
    }

    /// Parses one class document into its class tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or its root is not a
    /// `VNCLASS`.
    pub fn parse_tree(&self, xml: &str) -> Result<ClassNode> {
        let root = Element::parse_str(xml)?;
        if root.name() != ROOT_ELEMENT {
            return Err(Error::structural(
                root.name(),
                format!("expected <{ROOT_ELEMENT}> root element"),
            ));
        }
        ClassNode::from_element(&root, self.noun_phrase_rule)
    }

    /// Loads one class document.
    ///
    /// Data-quality warnings go to `diagnostics` only if the document loads.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn load_str(&self, xml: &str, diagnostics: &mut Diagnostics) -> Result<Vec<ClassFrames>> {
        let tree = self.parse_tree(xml)?;
        let mut local = Diagnostics::new();
        let classes = tree.flatten(&mut local);
        diagnostics.extend(local);
        Ok(classes)
    }

    /// Loads one class file.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the path if the file cannot be read or parsed.
    pub fn load_file<P: AsRef<Path>>(
        &self,
        path: P,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<ClassFrames>> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let xml = fs::read_to_string(path).map_err(|e| Error::io(&source, e))?;
        let classes = self
            .load_str(&xml, diagnostics)
            .map_err(|e| e.in_source(&source))?;
        debug!(file = %source, classes = classes.len(), "loaded class file");
        Ok(classes)
    }

    /// Loads every `*.xml` file in a directory, in sorted path order.
    ///
    /// A file that fails is recorded in the report and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory itself cannot be listed.
    pub fn load_dir<P: AsRef<Path>>(
        &self,
        dir: P,
        diagnostics: &mut Diagnostics,
    ) -> Result<LoadReport> {
        let dir = dir.as_ref();
        let paths = class_files(dir)?;
        let mut report = LoadReport::default();

        for path in paths {
            match self.load_file(&path, diagnostics) {
                Ok(classes) => {
                    report.classes.extend(classes);
                    report.files_loaded += 1;
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping class file");
                    report.failures.push((path, e));
                }
            }
        }

        info!(
            dir = %dir.display(),
            files = report.files_loaded,
            failed = report.failures.len(),
            classes = report.classes.len(),
            "loaded class hierarchy"
        );
        Ok(report)
    }
}

/// Lists the `*.xml` files of a directory, sorted.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be read.
pub fn class_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let source = dir.display().to_string();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(&source, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(&source, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
