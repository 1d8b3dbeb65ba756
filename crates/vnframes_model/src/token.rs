//! Frame syntax tokens.
//!
//! Each child of a frame's `SYNTAX` node becomes one [`Token`]. The fields a
//! token may carry depend on its kind; constructors enforce the rules.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vnframes_foundation::{Error, PosKind, Result, SelrestrSet};

/// Lexical tokens whose value acts as a preposition in primary strings.
pub const LEXICAL_PREPOSITIONS: &[&str] = &["as", "at", "down", "like"];

/// How strictly noun phrase restrictions are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NounPhraseRule {
    /// Selectional and syntactic restrictions may not both be non-empty.
    #[default]
    Exclusive,
    /// Both kinds of restriction may be populated at once.
    Permissive,
}

/// A syntax token: kind, optional value, and restrictions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pos: PosKind,
    value: Option<String>,
    selrestrs: SelrestrSet,
    synrestrs: Vec<String>,
}

impl Token {
    /// Creates a token, enforcing the validity rule for its kind.
    ///
    /// # Errors
    ///
    /// Returns an invalid token error if the fields do not fit the kind.
    pub fn new(
        pos: PosKind,
        value: Option<String>,
        selrestrs: SelrestrSet,
        synrestrs: Vec<String>,
    ) -> Result<Self> {
        Self::with_rule(pos, value, selrestrs, synrestrs, NounPhraseRule::default())
    }

    /// Creates a token with an explicit noun phrase rule.
    ///
    /// # Errors
    ///
    /// Returns an invalid token error if the fields do not fit the kind.
    pub fn with_rule(
        pos: PosKind,
        value: Option<String>,
        selrestrs: SelrestrSet,
        mut synrestrs: Vec<String>,
        rule: NounPhraseRule,
    ) -> Result<Self> {
        let value = value.filter(|v| !v.is_empty());
        match pos {
            PosKind::Lexical => {
                if value.is_none() {
                    return Err(Error::invalid_token(pos, "missing value"));
                }
                if !selrestrs.is_empty() || !synrestrs.is_empty() {
                    return Err(Error::invalid_token(pos, "lexical tokens carry no restrictions"));
                }
            }
            PosKind::NounPhrase => {
                if value.is_none() {
                    return Err(Error::invalid_token(pos, "missing value"));
                }
                if rule == NounPhraseRule::Exclusive
                    && !selrestrs.is_empty()
                    && !synrestrs.is_empty()
                {
                    return Err(Error::invalid_token(
                        pos,
                        "both selectional and syntactic restrictions are populated",
                    ));
                }
            }
            PosKind::Preposition => {
                if value.is_some() == !selrestrs.is_empty() {
                    return Err(Error::invalid_token(
                        pos,
                        "exactly one of a literal value or restrictions is required",
                    ));
                }
                if !synrestrs.is_empty() {
                    return Err(Error::invalid_token(pos, "prepositions carry no syntactic restrictions"));
                }
            }
            PosKind::Verb | PosKind::Adjective | PosKind::Adverb => {}
        }
        synrestrs.sort();
        Ok(Self {
            pos,
            value,
            selrestrs,
            synrestrs,
        })
    }

    /// Creates a lexical token.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty.
    pub fn lexical(value: impl Into<String>) -> Result<Self> {
        Self::new(PosKind::Lexical, Some(value.into()), SelrestrSet::empty(), Vec::new())
    }

    /// Creates a noun phrase token bound to a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or both restriction kinds are set.
    pub fn noun_phrase(
        role: impl Into<String>,
        selrestrs: SelrestrSet,
        synrestrs: Vec<String>,
    ) -> Result<Self> {
        Self::new(PosKind::NounPhrase, Some(role.into()), selrestrs, synrestrs)
    }

    /// Creates a verb token.
    #[must_use]
    pub fn verb() -> Self {
        Self::bare(PosKind::Verb)
    }

    /// Creates an adjective token.
    #[must_use]
    pub fn adjective() -> Self {
        Self::bare(PosKind::Adjective)
    }

    /// Creates an adverb token.
    #[must_use]
    pub fn adverb() -> Self {
        Self::bare(PosKind::Adverb)
    }

    /// Creates a preposition with literal values (whitespace separated).
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty.
    pub fn preposition(value: impl Into<String>) -> Result<Self> {
        Self::new(PosKind::Preposition, Some(value.into()), SelrestrSet::empty(), Vec::new())
    }

    /// Creates a preposition defined by selectional restrictions.
    ///
    /// # Errors
    ///
    /// Returns an error if the restriction set is empty.
    pub fn restricted_preposition(selrestrs: SelrestrSet) -> Result<Self> {
        Self::new(PosKind::Preposition, None, selrestrs, Vec::new())
    }

    fn bare(pos: PosKind) -> Self {
        Self {
            pos,
            value: None,
            selrestrs: SelrestrSet::empty(),
            synrestrs: Vec::new(),
        }
    }

    /// Returns the token kind.
    #[must_use]
    pub fn pos(&self) -> PosKind {
        self.pos
    }

    /// Returns true if the token has the given kind.
    #[must_use]
    pub fn is(&self, pos: PosKind) -> bool {
        self.pos == pos
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the selectional restrictions.
    #[must_use]
    pub fn selrestrs(&self) -> &SelrestrSet {
        &self.selrestrs
    }

    /// Returns the sorted syntactic restrictions.
    #[must_use]
    pub fn synrestrs(&self) -> &[String] {
        &self.synrestrs
    }

    /// Returns true for prepositions and for lexical tokens used as one.
    #[must_use]
    pub fn is_prepositional(&self) -> bool {
        match self.pos {
            PosKind::Preposition => true,
            PosKind::Lexical => self
                .value
                .as_deref()
                .is_some_and(|v| LEXICAL_PREPOSITIONS.contains(&v)),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pos)?;
        if let Some(value) = &self.value {
            write!(f, "({value})")?;
        }
        if !self.selrestrs.is_empty() {
            let logic = self.selrestrs.logic().to_string();
            write!(f, "[{logic}{}]", self.selrestrs.labels().join(" "))?;
        }
        if !self.synrestrs.is_empty() {
            write!(f, "{{{}}}", self.synrestrs.join(" "))?;
        }
        Ok(())
    }
}
