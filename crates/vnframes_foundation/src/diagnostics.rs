//! Data-quality diagnostics.
//!
//! The resource is known to contain irregularities that are accepted rather
//! than fixed. Loaders and format derivations record them here instead of
//! failing, and callers report them alongside normal output.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::debug;

/// Category of a recoverable anomaly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningKind {
    /// A class has neither members nor frames.
    EmptyClass,
    /// A class has frames but no members.
    MemberlessClass,
    /// A class has members but no frames.
    FramelessClass,
    /// An annotation pass changed the number of tokens.
    TokenCountMismatch,
    /// A placeholder found no noun phrase token and no exception covers it.
    PlaceholderExhausted,
    /// A noun phrase token names a role the frame does not have.
    MissingRole,
    /// A documented exception's sanity check did not hold.
    UnverifiedException,
    /// An expansion left literals unplaced.
    UnplacedLiteral,
    /// A `PP` placeholder had no literal left to take.
    MissingLiteral,
    /// Frame variants could not be paired positionally.
    VariantMismatch,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EmptyClass => "empty-class",
            Self::MemberlessClass => "memberless-class",
            Self::FramelessClass => "frameless-class",
            Self::TokenCountMismatch => "token-count-mismatch",
            Self::PlaceholderExhausted => "placeholder-exhausted",
            Self::MissingRole => "missing-role",
            Self::UnverifiedException => "unverified-exception",
            Self::UnplacedLiteral => "unplaced-literal",
            Self::MissingLiteral => "missing-literal",
            Self::VariantMismatch => "variant-mismatch",
        };
        f.write_str(name)
    }
}

/// A recoverable anomaly observed while loading or formatting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataQualityWarning {
    /// The anomaly category.
    pub kind: WarningKind,
    /// Class where it was observed, if known.
    pub class_id: Option<String>,
    /// Frame where it was observed, if known.
    pub frame: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl DataQualityWarning {
    /// Creates a warning with no location.
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            class_id: None,
            frame: None,
            message: message.into(),
        }
    }

    /// Sets the class id.
    #[must_use]
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    /// Sets the frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind)?;
        if let Some(class_id) = &self.class_id {
            write!(f, " {class_id}")?;
        }
        if let Some(frame) = &self.frame {
            write!(f, " '{frame}'")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Collector for [`DataQualityWarning`]s.
///
/// Identical warnings are recorded once; the same frame is formatted for
/// every member verb and would otherwise repeat.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<DataQualityWarning>,
    seen: HashSet<DataQualityWarning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning. Returns false if an identical one was already recorded.
    pub fn push(&mut self, warning: DataQualityWarning) -> bool {
        if self.seen.contains(&warning) {
            return false;
        }
        debug!(
            kind = %warning.kind,
            class_id = warning.class_id.as_deref().unwrap_or(""),
            frame = warning.frame.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
        self.seen.insert(warning.clone());
        self.warnings.push(warning);
        true
    }

    /// Records every warning from another collector.
    pub fn extend(&mut self, other: Diagnostics) {
        for warning in other.warnings {
            self.push(warning);
        }
    }

    /// Returns the recorded warnings in order.
    #[must_use]
    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }

    /// Consumes the collector, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<DataQualityWarning> {
        self.warnings
    }

    /// Returns the number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Counts warnings of one kind.
    #[must_use]
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Counts warnings per kind.
    #[must_use]
    pub fn summary(&self) -> BTreeMap<WarningKind, usize> {
        let mut counts = BTreeMap::new();
        for warning in &self.warnings {
            *counts.entry(warning.kind).or_insert(0) += 1;
        }
        counts
    }
}
