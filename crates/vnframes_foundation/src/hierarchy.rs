//! Preposition-class hierarchy.
//!
//! Maps semantic preposition classes (`loc`, `path`, `dest_dir`, ...) to the
//! literal prepositions they license. The visual preposition classes form a
//! tree rooted at `spatial`:
//!
//! ```text
//! spatial
//!  |---> loc
//!  |---> path
//!         |---> dir
//!         |---> src
//!         |---> dest
//!                |---> dest_conf
//!                |---> dest_dir
//! ```
//!
//! Negative restrictions (`-X`) are resolved as the complement of `X` within
//! the root class, which is only meaningful because of this tree.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use im::OrdSet;
use tracing::debug;

use crate::error::{Error, Result};

/// A sorted set of literal prepositions.
pub type LiteralSet = OrdSet<String>;

/// The top-level class of the visual preposition tree.
pub const ROOT_CLASS: &str = "spatial";

/// Parent/children edges of the visual preposition tree, leaves first.
pub const VISUAL_CLASS_TREE: &[(&str, &[&str])] = &[
    ("dest", &["dest_dir", "dest_conf"]),
    ("path", &["dir", "src", "dest"]),
    ("spatial", &["loc", "path"]),
];

/// Every class of the visual preposition tree.
pub const VISUAL_CLASSES: &[&str] = &[
    "dest_dir", "dest_conf", "dest", "src", "dir", "path", "loc", "spatial",
];

/// Reference table from preposition class names to literal prepositions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrepositionClassHierarchy {
    classes: HashMap<String, LiteralSet>,
}

impl PrepositionClassHierarchy {
    /// Creates an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method adding literals to a class.
    #[must_use]
    pub fn with_class<I, S>(mut self, name: impl Into<String>, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, literals);
        self
    }

    /// Adds literals to a class, creating it if needed.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.classes.entry(name.into()).or_default();
        for literal in literals {
            set.insert(literal.into());
        }
    }

    /// Returns the literals of a class.
    #[must_use]
    pub fn literals(&self, name: &str) -> Option<&LiteralSet> {
        self.classes.get(name)
    }

    /// Returns true if the class is known.
    #[must_use]
    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns all class names, sorted.
    #[must_use]
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if there are no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the literals of the root class that are not in `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if either `name` or the root class is unknown.
    pub fn complement(&self, name: &str) -> Result<LiteralSet> {
        let root = self
            .literals(ROOT_CLASS)
            .ok_or_else(|| Error::internal(format!("hierarchy has no '{ROOT_CLASS}' class")))?;
        let excluded = self
            .literals(name)
            .ok_or_else(|| Error::internal(format!("unknown preposition class '{name}'")))?;
        Ok(root
            .iter()
            .filter(|literal| !excluded.contains(*literal))
            .cloned()
            .collect())
    }

    /// Merges another hierarchy into a copy of this one, unioning classes.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (name, literals) in &other.classes {
            merged.insert(name.clone(), literals.iter().cloned());
        }
        merged
    }

    /// Parses a JSON object mapping class names to literal arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not such an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json).map_err(Error::json)?;
        let mut hierarchy = Self::new();
        for (name, literals) in raw {
            hierarchy.insert(name, literals);
        }
        Ok(hierarchy)
    }

    /// Loads a hierarchy from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::from_json_str(&contents).map_err(|e| e.in_source(path.display().to_string()))
    }

    /// Serializes the hierarchy as a JSON object with sorted literal arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        let sorted: BTreeMap<&str, Vec<&str>> = self
            .classes
            .iter()
            .map(|(name, literals)| (name.as_str(), literals.iter().map(String::as_str).collect()))
            .collect();
        serde_json::to_string(&sorted).map_err(Error::json)
    }

    /// Builds the visual preposition hierarchy from an `isa(literal,class)`
    /// listing.
    ///
    /// Lines that do not start with `isa` are ignored, as are `isa` lines
    /// whose literal is itself a class (those describe the tree). Class sets
    /// are then closed upward along [`VISUAL_CLASS_TREE`].
    #[must_use]
    pub fn from_isa_text(text: &str) -> Self {
        let mut hierarchy = Self::new();
        for class in VISUAL_CLASSES {
            hierarchy.classes.insert((*class).to_string(), LiteralSet::new());
        }

        for line in text.lines().map(str::trim) {
            let Some((literal, class)) = parse_isa(line) else {
                continue;
            };
            if VISUAL_CLASSES.contains(&literal) {
                continue;
            }
            if !VISUAL_CLASSES.contains(&class) {
                debug!(literal, class, "ignoring isa line for unknown class");
                continue;
            }
            hierarchy.insert(class, [literal]);
        }

        for (parent, children) in VISUAL_CLASS_TREE {
            let mut closed = hierarchy.classes.get(*parent).cloned().unwrap_or_default();
            for child in *children {
                if let Some(literals) = hierarchy.classes.get(*child) {
                    closed = closed.union(literals.clone());
                }
            }
            hierarchy.classes.insert((*parent).to_string(), closed);
        }

        hierarchy
    }

    /// Harvests literal/class pairs from expanded frame columns.
    ///
    /// Every lowercase literal immediately followed by an `NP.<class>` token
    /// adds the literal to `<class>`.
    #[must_use]
    pub fn harvest_from_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        let mut hierarchy = Self::new();
        for column in columns {
            let tokens: Vec<&str> = column.as_ref().split_whitespace().collect();
            for pair in tokens.windows(2) {
                let (literal, next) = (pair[0], pair[1]);
                if !is_plain_literal(literal) {
                    continue;
                }
                if let Some(class) = next.strip_prefix("NP.") {
                    hierarchy.insert(class, [literal]);
                }
            }
        }
        hierarchy
    }
}

/// Parses `isa(word,word)` at the start of a line.
fn parse_isa(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("isa(")?;
    let (inner, _) = rest.split_once(')')?;
    let (literal, class) = inner.split_once(',')?;
    let is_word = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_');
    (is_word(literal) && is_word(class)).then_some((literal, class))
}

fn is_plain_literal(token: &str) -> bool {
    !token.contains('+')
        && token.chars().any(char::is_lowercase)
        && !token.chars().any(char::is_uppercase)
}
