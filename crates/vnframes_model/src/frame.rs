//! Syntactic frames.
//!
//! A frame pairs the primary description (display tokens such as `NP V
//! PP.destination`) with the syntax tokens of the frame and the thematic
//! roles in scope for its class. The two sequences are related but not
//! aligned; format derivation walks them side by side.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vnframes_foundation::PosKind;

use crate::correction::correct_primary;
use crate::role::ThematicRole;
use crate::token::Token;

/// One syntactic frame of a verb class.
///
/// Equality and hashing ignore the class id, so the same frame inherited by
/// several subclasses collapses to one value.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    primary: Vec<String>,
    syntax: Vec<Token>,
    roles: Vec<ThematicRole>,
    class_id: Option<String>,
}

impl Frame {
    /// Creates a frame from already-split primary tokens.
    ///
    /// Roles are sorted and deduplicated.
    pub fn new<P, S>(primary: P, syntax: Vec<Token>, mut roles: Vec<ThematicRole>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        roles.sort();
        roles.dedup();
        Self {
            primary: primary.into_iter().map(Into::into).collect(),
            syntax,
            roles,
            class_id: None,
        }
    }

    /// Creates a frame from a raw primary description.
    ///
    /// The description is corrected, then split on whitespace.
    #[must_use]
    pub fn from_description(
        description: &str,
        syntax: Vec<Token>,
        roles: Vec<ThematicRole>,
        class_id: Option<&str>,
    ) -> Self {
        let corrected = correct_primary(description, class_id);
        let frame = Self::new(corrected.split_whitespace(), syntax, roles);
        match class_id {
            Some(id) => frame.with_class_id(id),
            None => frame,
        }
    }

    /// Sets the provenance class id.
    #[must_use]
    pub fn with_class_id(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    /// Returns the primary display tokens.
    #[must_use]
    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    /// Returns the syntax tokens.
    #[must_use]
    pub fn syntax(&self) -> &[Token] {
        &self.syntax
    }

    /// Returns the sorted roles.
    #[must_use]
    pub fn roles(&self) -> &[ThematicRole] {
        &self.roles
    }

    /// Returns the class the frame was read from, if known.
    #[must_use]
    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    /// Returns the primary tokens joined with single spaces.
    #[must_use]
    pub fn joined(&self) -> String {
        self.primary.join(" ")
    }

    /// Returns the role of the given type.
    #[must_use]
    pub fn role(&self, role_type: &str) -> Option<&ThematicRole> {
        self.roles.iter().find(|r| r.role_type() == role_type)
    }

    /// Returns true if the frame has a role of the given type.
    #[must_use]
    pub fn has_role(&self, role_type: &str) -> bool {
        self.role(role_type).is_some()
    }

    /// Finds the first noun phrase token at or after `start`.
    ///
    /// Returns its index and the token.
    #[must_use]
    pub fn noun_phrase_from(&self, start: usize) -> Option<(usize, &Token)> {
        self.syntax
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, t)| t.is(PosKind::NounPhrase))
    }

    /// Iterates over prepositions and prepositional lexical tokens, in order.
    pub fn prepositional_tokens(&self) -> impl Iterator<Item = &Token> {
        self.syntax.iter().filter(|t| t.is_prepositional())
    }

    /// Returns true for the degenerate single-token `Passive` frame.
    #[must_use]
    pub fn is_passive(&self) -> bool {
        self.primary.len() == 1 && self.primary[0] == "Passive"
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary && self.syntax == other.syntax && self.roles == other.roles
    }
}

impl Eq for Frame {}

impl Hash for Frame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.primary.hash(state);
        self.syntax.hash(state);
        self.roles.hash(state);
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
