//! Documented irregularities in frame annotation and expansion.
//!
//! Annotation pairs each placeholder of the primary description with the next
//! noun phrase of the syntax. A handful of frames break that pairing; the
//! tables here list them so the annotation passes can leave those
//! placeholders as they are. Expansion has its own table for literals left
//! over after a rewrite.

use vnframes_foundation::PosKind;
use vnframes_model::Frame;

use crate::normalize::is_lowercase_word;

/// Frames whose noun phrases are collapsed in the syntax.
const COLLAPSED_NOUN_PHRASE_FRAMES: &[&str] = &[
    // mix-22.1: two noun phrases share one plural syntax token
    "NP NP V together",
    "NP V NP NP together",
    "NP NP V ADVP-Middle together",
    // confess-37, indicate-78
    "NP V NP to be NP",
];

/// A placeholder being annotated, with what has been emitted before it.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderSite<'a> {
    /// The frame being annotated.
    pub frame: &'a Frame,
    /// The token sequence being walked.
    pub tokens: &'a [String],
    /// Position of the placeholder in `tokens`.
    pub index: usize,
    /// Tokens emitted so far.
    pub emitted: &'a [String],
}

impl PlaceholderSite<'_> {
    /// Returns the placeholder.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.tokens[self.index]
    }

    fn previous(&self) -> Option<&str> {
        self.index.checked_sub(1).map(|i| self.tokens[i].as_str())
    }

    fn next(&self) -> Option<&str> {
        self.tokens.get(self.index + 1).map(String::as_str)
    }

    fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// When an exception applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteCondition {
    /// The placeholder is exactly this token.
    Placeholder(&'static str),
    /// The placeholder starts with this text.
    PlaceholderPrefix(&'static str),
    /// The tokens end with `tail` and the placeholder sits at one of `indices`.
    TailAt {
        /// Trailing tokens.
        tail: &'static [&'static str],
        /// Placeholder positions.
        indices: &'static [usize],
    },
    /// The placeholder is `token` and the next token starts with `next_prefix`.
    FollowedBy {
        /// The placeholder.
        token: &'static str,
        /// Prefix of the following token.
        next_prefix: &'static str,
    },
    /// The placeholder starts with `prefix` and the previous token contains
    /// `previous`.
    After {
        /// Placeholder prefix.
        prefix: &'static str,
        /// Text in the previous token.
        previous: &'static str,
    },
    /// One of the last `lookback` emitted tokens contains `text`.
    RecentlyEmitted {
        /// How many emitted tokens to inspect.
        lookback: usize,
        /// Text to look for.
        text: &'static str,
    },
    /// The emitted tokens end with `tail`, preceded by a token containing
    /// `before`.
    EmittedTailAfter {
        /// Trailing emitted tokens.
        tail: &'static [&'static str],
        /// Text in the token before the tail.
        before: &'static str,
    },
    /// The joined token sequence is one of these frames.
    FrameIn(&'static [&'static str]),
    /// The token sequence contains this token.
    FrameContains(&'static str),
}

impl SiteCondition {
    /// Returns true if the condition holds at the site.
    #[must_use]
    pub fn matches(&self, site: &PlaceholderSite<'_>) -> bool {
        match *self {
            Self::Placeholder(token) => site.placeholder() == token,
            Self::PlaceholderPrefix(prefix) => site.placeholder().starts_with(prefix),
            Self::TailAt { tail, indices } => {
                site.tokens.len() >= tail.len()
                    && site.tokens[site.tokens.len() - tail.len()..]
                        .iter()
                        .map(String::as_str)
                        .eq(tail.iter().copied())
                    && indices.contains(&site.index)
            }
            Self::FollowedBy { token, next_prefix } => {
                site.placeholder() == token
                    && site.next().is_some_and(|next| next.starts_with(next_prefix))
            }
            Self::After { prefix, previous } => {
                site.placeholder().starts_with(prefix)
                    && site.previous().is_some_and(|p| p.contains(previous))
            }
            Self::RecentlyEmitted { lookback, text } => site
                .emitted
                .iter()
                .rev()
                .take(lookback)
                .any(|t| t.contains(text)),
            Self::EmittedTailAfter { tail, before } => {
                let emitted = site.emitted;
                emitted.len() > tail.len()
                    && emitted[emitted.len() - tail.len()..]
                        .iter()
                        .map(String::as_str)
                        .eq(tail.iter().copied())
                    && emitted[emitted.len() - tail.len() - 1].contains(before)
            }
            Self::FrameIn(frames) => {
                let joined = site.joined();
                frames.contains(&joined.as_str())
            }
            Self::FrameContains(token) => site.tokens.iter().any(|t| t == token),
        }
    }
}

/// A sanity check that must hold for an exception to be trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    /// The last syntax token is a noun phrase with syntactic restrictions.
    LastTokenIsRestrictedNounPhrase,
}

impl Verification {
    /// Returns true if the check holds for the frame.
    #[must_use]
    pub fn holds(self, frame: &Frame) -> bool {
        match self {
            Self::LastTokenIsRestrictedNounPhrase => frame
                .syntax()
                .last()
                .is_some_and(|t| t.is(PosKind::NounPhrase) && !t.synrestrs().is_empty()),
        }
    }
}

/// A placeholder exception: emit the placeholder without annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderException {
    /// Short description used in diagnostics.
    pub name: &'static str,
    /// When it applies.
    pub condition: SiteCondition,
    /// Check to run when it applies.
    pub verify: Option<Verification>,
}

impl PlaceholderException {
    const fn pass(name: &'static str, condition: SiteCondition) -> Self {
        Self {
            name,
            condition,
            verify: None,
        }
    }
}

/// Restriction annotation: consulted before looking for the next noun phrase.
pub const SELRESTR_BEFORE_LOOKUP: &[PlaceholderException] = &[
    // rely-70: the theme and its noun phrase are both carried by the S_ING
    PlaceholderException::pass(
        "rely-70 theme before gerund",
        SiteCondition::TailAt {
            tail: &["PP.theme", "NP", "S_ING"],
            indices: &[2, 3],
        },
    ),
    PlaceholderException::pass(
        "theme before sentential complement",
        SiteCondition::FollowedBy {
            token: "PP.theme",
            next_prefix: "S",
        },
    ),
];

/// Restriction annotation: consulted when no noun phrase is left.
pub const SELRESTR_ON_EXHAUSTION: &[PlaceholderException] = &[
    PlaceholderException::pass("arbitrary pronoun", SiteCondition::Placeholder("NP-PRO-ARB")),
    PlaceholderException::pass("adverbial", SiteCondition::PlaceholderPrefix("ADVP")),
    PlaceholderException::pass("sentential complement", SiteCondition::PlaceholderPrefix("S")),
    // consider-29.9
    PlaceholderException::pass("attribute", SiteCondition::Placeholder("PP.attribute")),
    PlaceholderException::pass(
        "collapsed noun phrases",
        SiteCondition::FrameIn(COLLAPSED_NOUN_PHRASE_FRAMES),
    ),
    PlaceholderException {
        name: "topic with vanished complement",
        condition: SiteCondition::FrameContains("PP.topic"),
        verify: Some(Verification::LastTokenIsRestrictedNounPhrase),
    },
];

/// Role annotation: consulted when no noun phrase is left.
pub const ROLE_ON_EXHAUSTION: &[PlaceholderException] = &[
    PlaceholderException::pass(
        "complement after qualified preposition",
        SiteCondition::After {
            prefix: "S_",
            previous: "PP.",
        },
    ),
    PlaceholderException::pass(
        "recently qualified",
        SiteCondition::RecentlyEmitted {
            lookback: 2,
            text: ".",
        },
    ),
    PlaceholderException::pass(
        "to be after qualified",
        SiteCondition::EmittedTailAfter {
            tail: &["to", "be"],
            before: ".",
        },
    ),
    PlaceholderException::pass(
        "collapsed noun phrases",
        SiteCondition::FrameIn(&[
            "NP NP V together",
            "NP V NP NP together",
            "NP NP V ADVP-Middle together",
            "NP NP V ADVP together",
            "NP V NP to be NP",
        ]),
    ),
];

/// Returns the first exception in `table` that applies at the site.
#[must_use]
pub fn find_exception<'t>(
    table: &'t [PlaceholderException],
    site: &PlaceholderSite<'_>,
) -> Option<&'t PlaceholderException> {
    table.iter().find(|e| e.condition.matches(site))
}

/// A rewritten expansion with literals still unplaced.
#[derive(Clone, Copy, Debug)]
pub struct LeftoverSite<'a> {
    /// The primary tokens that were rewritten.
    pub primary: &'a [String],
    /// The rewritten tokens.
    pub rewritten: &'a [String],
    /// Literals not yet placed, in order.
    pub leftover: &'a [&'a str],
}

/// What to do with leftover literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftoverAction {
    /// Discard them.
    Drop,
    /// Insert the single leftover before the trailing sentential complement,
    /// or before the lowercase word that introduces it.
    InsertBeforeSentential,
}

/// When a leftover exception applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftoverCondition {
    /// The first leftover is `literal` and no primary token contains `absent`.
    LiteralWithout {
        /// The leftover literal.
        literal: &'static str,
        /// Text that must not appear in the primary.
        absent: &'static str,
    },
    /// Exactly one literal is left and the last rewritten token starts with
    /// `prefix`.
    SingleBeforeTrailing {
        /// Prefix of the trailing token.
        prefix: &'static str,
    },
}

impl LeftoverCondition {
    /// Returns true if the condition holds.
    #[must_use]
    pub fn matches(&self, site: &LeftoverSite<'_>) -> bool {
        match *self {
            Self::LiteralWithout { literal, absent } => {
                site.leftover.first() == Some(&literal)
                    && !site.primary.iter().any(|t| t.contains(absent))
            }
            Self::SingleBeforeTrailing { prefix } => {
                site.leftover.len() == 1
                    && site.rewritten.len() >= 2
                    && site.rewritten.last().is_some_and(|t| t.starts_with(prefix))
            }
        }
    }
}

/// A leftover-literal exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeftoverException {
    /// Short description used in diagnostics.
    pub name: &'static str,
    /// When it applies.
    pub condition: LeftoverCondition,
    /// What to do.
    pub action: LeftoverAction,
}

/// Expansion: consulted when literals remain after a rewrite.
pub const EXPANSION_LEFTOVER: &[LeftoverException] = &[
    LeftoverException {
        name: "as without a prepositional phrase",
        condition: LeftoverCondition::LiteralWithout {
            literal: "as",
            absent: "PP",
        },
        action: LeftoverAction::Drop,
    },
    LeftoverException {
        name: "preposition of a trailing complement",
        condition: LeftoverCondition::SingleBeforeTrailing { prefix: "S" },
        action: LeftoverAction::InsertBeforeSentential,
    },
];

/// Returns the first leftover exception that applies.
#[must_use]
pub fn find_leftover_exception(site: &LeftoverSite<'_>) -> Option<&'static LeftoverException> {
    EXPANSION_LEFTOVER.iter().find(|e| e.condition.matches(site))
}

impl LeftoverAction {
    /// Applies the action to the rewritten tokens.
    pub fn apply(self, rewritten: &mut Vec<String>, leftover: &[&str]) {
        match self {
            Self::Drop => {}
            Self::InsertBeforeSentential => {
                let len = rewritten.len();
                let Some(literal) = leftover.first() else {
                    return;
                };
                if len < 2 {
                    return;
                }
                let at = if is_lowercase_word(&rewritten[len - 2]) {
                    len - 2
                } else {
                    len - 1
                };
                rewritten.insert(at, (*literal).to_string());
            }
        }
    }
}
