//! Selectional restriction sets.
//!
//! A restriction label is the concatenation of a polarity sign and a
//! restriction type, e.g. `+animate` or `-region`. Labels are grouped into
//! sets with a combination mode taken from the XML `logic` attribute.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the labels of a [`SelrestrSet`] combine.
///
/// The declaration order is the sort order of sets: OR sets sort before
/// unmarked sets, which sort before AND sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Logic {
    /// `logic="or"`: any label may hold.
    Or,
    /// No `logic` attribute: labels are treated as a conjunction.
    #[default]
    Unmarked,
    /// `logic="and"`: every label must hold.
    And,
}

impl Logic {
    /// Parses the value of a `logic` attribute.
    ///
    /// # Errors
    ///
    /// Returns a structural error for anything other than `or` or `and`.
    pub fn from_attr(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::Unmarked),
            Some("or") => Ok(Self::Or),
            Some("and") => Ok(Self::And),
            Some(other) => Err(Error::structural(
                "SELRESTRS",
                format!("logic must be 'or' or 'and', found {other:?}"),
            )),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => f.write_str("OR"),
            Self::Unmarked => Ok(()),
            Self::And => f.write_str("AND"),
        }
    }
}

/// Sign of a restriction label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// `+X`: the filler must be an X.
    Positive,
    /// `-X`: the filler must not be an X.
    Negative,
}

/// Splits a label like `+animate` into its polarity and restriction type.
///
/// Returns `None` when the label has no sign or an empty type.
#[must_use]
pub fn split_label(label: &str) -> Option<(Polarity, &str)> {
    let (polarity, rest) = if let Some(rest) = label.strip_prefix('+') {
        (Polarity::Positive, rest)
    } else if let Some(rest) = label.strip_prefix('-') {
        (Polarity::Negative, rest)
    } else {
        return None;
    };
    if rest.is_empty() {
        None
    } else {
        Some((polarity, rest))
    }
}

/// An ordered, deduplicated set of restriction labels with a combination mode.
///
/// Two sets with the same labels but different modes are different values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelrestrSet {
    logic: Logic,
    labels: Vec<String>,
}

impl SelrestrSet {
    /// Creates a set from labels, sorting and deduplicating them.
    pub fn new<I, S>(labels: I, logic: Logic) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();
        Self { logic, labels }
    }

    /// Creates an empty, unmarked set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the combination mode.
    #[must_use]
    pub fn logic(&self) -> Logic {
        self.logic
    }

    /// Returns the sorted labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns true if the set has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Iterates over the labels.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Renders the set as annotation labels.
    ///
    /// OR and AND sets collapse into a single `+OR(...)`/`+AND(...)` label;
    /// unmarked sets contribute each label on its own.
    #[must_use]
    pub fn rendered_labels(&self) -> Vec<String> {
        match self.logic {
            Logic::Or => vec![format!("+OR({})", self.labels.concat())],
            Logic::And => vec![format!("+AND({})", self.labels.concat())],
            Logic::Unmarked => self.labels.clone(),
        }
    }
}

impl fmt::Display for SelrestrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_labels().concat())
    }
}
