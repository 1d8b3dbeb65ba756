//! Verb class members.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A member verb of a class.
///
/// Identity is the pair (verb, class id); WordNet senses and grouping are
/// carried along but do not distinguish entries.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerbEntry {
    /// Surface form, e.g. `give`.
    pub verb: String,
    /// Class the entry belongs to, e.g. `give-13.1`.
    pub class_id: String,
    /// WordNet sense ids.
    pub wordnet: Vec<String>,
    /// OntoNotes grouping attribute.
    pub grouping: Option<String>,
}

impl VerbEntry {
    /// Creates an entry with no WordNet senses.
    #[must_use]
    pub fn new(verb: impl Into<String>, class_id: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            class_id: class_id.into(),
            wordnet: Vec::new(),
            grouping: None,
        }
    }

    /// Sets the WordNet sense ids.
    #[must_use]
    pub fn with_wordnet<I, S>(mut self, senses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wordnet = senses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the grouping attribute.
    #[must_use]
    pub fn with_grouping(mut self, grouping: impl Into<String>) -> Self {
        self.grouping = Some(grouping.into());
        self
    }

    /// Returns the `verb#class-id` key.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}#{}", self.verb, self.class_id)
    }
}

impl PartialEq for VerbEntry {
    fn eq(&self, other: &Self) -> bool {
        self.verb == other.verb && self.class_id == other.class_id
    }
}

impl Eq for VerbEntry {}

impl Hash for VerbEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.verb.hash(state);
        self.class_id.hash(state);
    }
}

impl fmt::Display for VerbEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.verb, self.class_id)
    }
}
