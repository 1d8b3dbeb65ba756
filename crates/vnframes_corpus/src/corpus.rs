//! The verb to frames corpus.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::{debug, info};
use vnframes_engine::{FormatEngine, FrameFormat};
use vnframes_foundation::{Diagnostics, Result};
use vnframes_model::{Frame, VerbEntry, correct_wn_sense};
use vnframes_parser::ClassFrames;

use crate::matrix::FrameMatrix;

/// Role whose absence marks a verb as non-topical.
pub const DEFAULT_EXCLUDED_ROLE: &str = "Topic";

/// A member verb with every frame it licenses.
#[derive(Clone, Debug)]
pub struct CorpusEntry {
    /// The member.
    pub verb: VerbEntry,
    /// Its frames, without duplicates.
    pub frames: Vec<Frame>,
}

/// Per-verb frame strings in one format, in first-seen verb order.
pub type FrameStrings = Vec<(String, BTreeSet<String>)>;

/// Every member verb of a class hierarchy with its frames.
///
/// Entries keep the order in which members are first seen. A member listed
/// twice (by key) accumulates the frames of both listings.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from flattened classes.
    #[must_use]
    pub fn from_classes<I>(classes: I) -> Self
    where
        I: IntoIterator<Item = ClassFrames>,
    {
        let mut corpus = Self::new();
        for class in classes {
            corpus.add_class(class);
        }
        info!(verbs = corpus.len(), "built corpus");
        corpus
    }

    /// Adds every member of a class with the class's frames.
    pub fn add_class(&mut self, class: ClassFrames) {
        for member in class.members {
            let key = member.key();
            let at = match self.index.get(&key) {
                Some(&at) => at,
                None => {
                    self.index.insert(key, self.entries.len());
                    self.entries.push(CorpusEntry {
                        verb: member,
                        frames: Vec::new(),
                    });
                    self.entries.len() - 1
                }
            };
            let frames = &mut self.entries[at].frames;
            for frame in &class.frames {
                if !frames.contains(frame) {
                    frames.push(frame.clone());
                }
            }
        }
    }

    /// Returns the number of member entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Returns the entry for a `verb#class-id` key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CorpusEntry> {
        self.index.get(key).map(|&at| &self.entries[at])
    }

    /// Returns every distinct frame in the corpus, in first-seen order.
    #[must_use]
    pub fn unique_frames(&self) -> Vec<&Frame> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|entry| &entry.frames)
            .filter(|frame| seen.insert(*frame))
            .collect()
    }

    /// Renders every verb's frames in a format.
    ///
    /// Rows are keyed by `verb#class-id`, or by the bare verb when
    /// `verbs_only` is set, in which case every class of a verb shares a row.
    ///
    /// # Errors
    ///
    /// Returns the first format derivation error.
    pub fn stringify(
        &self,
        engine: &FormatEngine<'_>,
        format: FrameFormat,
        verbs_only: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<FrameStrings> {
        let mut rows: FrameStrings = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for entry in &self.entries {
            let key = if verbs_only {
                entry.verb.verb.clone()
            } else {
                entry.verb.key()
            };
            let at = match index.get(&key) {
                Some(&at) => at,
                None => {
                    index.insert(key.clone(), rows.len());
                    rows.push((key, BTreeSet::new()));
                    rows.len() - 1
                }
            };
            for frame in &entry.frames {
                rows[at].1.extend(engine.format(frame, format, diagnostics)?);
            }
        }
        debug!(format = %format, rows = rows.len(), "stringified corpus");
        Ok(rows)
    }

    /// Builds the member by frame matrix for a format.
    ///
    /// # Errors
    ///
    /// Returns the first format derivation error.
    pub fn to_matrix(
        &self,
        engine: &FormatEngine<'_>,
        format: FrameFormat,
        verbs_only: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<FrameMatrix> {
        let rows = self.stringify(engine, format, verbs_only, diagnostics)?;
        let matrix = FrameMatrix::from_frame_strings(rows);
        info!(
            format = %format,
            members = matrix.len(),
            columns = matrix.columns().len(),
            "built frame matrix"
        );
        Ok(matrix)
    }

    /// Returns the keys of verbs none of whose frames has the role.
    #[must_use]
    pub fn verbs_lacking_role(&self, role_type: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.frames.iter().any(|frame| frame.has_role(role_type)))
            .map(|entry| entry.verb.key())
            .collect()
    }

    /// Maps each `verb#class-id` key to its corrected WordNet sense ids.
    #[must_use]
    pub fn wordnet_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|entry| {
                let senses = entry
                    .verb
                    .wordnet
                    .iter()
                    .map(|sense| correct_wn_sense(sense).to_string())
                    .collect();
                (entry.verb.key(), senses)
            })
            .collect()
    }

    /// Maps each class id to its member verbs, in member order.
    #[must_use]
    pub fn class_members(&self) -> BTreeMap<String, Vec<String>> {
        let mut classes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            classes
                .entry(entry.verb.class_id.clone())
                .or_default()
                .push(entry.verb.verb.clone());
        }
        classes
    }
}
