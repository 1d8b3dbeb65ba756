//! Part-of-speech kinds for frame syntax tokens.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of syntax token kinds found in a frame's `SYNTAX` node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PosKind {
    /// A literal word (`LEX`).
    Lexical,
    /// A noun phrase slot bound to a thematic role (`NP`).
    NounPhrase,
    /// The verb itself (`VERB`).
    Verb,
    /// A preposition, literal or restriction-defined (`PREP`).
    Preposition,
    /// An adjective (`ADJ`).
    Adjective,
    /// An adverb (`ADV`).
    Adverb,
}

impl PosKind {
    /// All kinds, in declaration order.
    pub const ALL: [PosKind; 6] = [
        PosKind::Lexical,
        PosKind::NounPhrase,
        PosKind::Verb,
        PosKind::Preposition,
        PosKind::Adjective,
        PosKind::Adverb,
    ];

    /// Maps a syntax element name to its kind.
    #[must_use]
    pub fn from_element(name: &str) -> Option<Self> {
        match name {
            "LEX" => Some(Self::Lexical),
            "NP" => Some(Self::NounPhrase),
            "VERB" => Some(Self::Verb),
            "PREP" => Some(Self::Preposition),
            "ADJ" => Some(Self::Adjective),
            "ADV" => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Returns the syntax element name for this kind.
    #[must_use]
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::Lexical => "LEX",
            Self::NounPhrase => "NP",
            Self::Verb => "VERB",
            Self::Preposition => "PREP",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
        }
    }
}

impl fmt::Display for PosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}
