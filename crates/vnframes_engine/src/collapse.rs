//! Idiom collapse for collapsed formats.
//!
//! After normalization some frames still differ only in a literal particle
//! or complementizer. These rules fold them together.

use crate::normalize::is_lowercase_word;

/// One collapse rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdiomRule {
    /// Replace an exact token sequence.
    Exact {
        /// Sequences the rule applies to.
        from: &'static [&'static [&'static str]],
        /// The replacement.
        to: &'static [&'static str],
    },
    /// Replace the lowercase word just before a trailing sequence with `comp`.
    Complementizer {
        /// The trailing sequence.
        tail: &'static [&'static str],
    },
}

/// The word that replaces complementizers.
pub const COMPLEMENTIZER: &str = "comp";

/// The collapse rules, in priority order. The first match wins.
pub const IDIOM_RULES: &[IdiomRule] = &[
    IdiomRule::Exact {
        from: &[&["NP", "V", "for", "NP", "S"]],
        to: &["NP", "V", "PP", "S"],
    },
    IdiomRule::Complementizer { tail: &["S"] },
    IdiomRule::Complementizer { tail: &["S", "PP"] },
    IdiomRule::Exact {
        from: &[
            &["NP", "V", "down", "NP"],
            &["NP", "V", "for", "NP"],
            &["NP", "V", "up", "NP"],
        ],
        to: &["NP", "V", "PP"],
    },
];

impl IdiomRule {
    /// Applies the rule, returning the rewritten tokens if it matched.
    #[must_use]
    pub fn apply(&self, tokens: &[String]) -> Option<Vec<String>> {
        match self {
            Self::Exact { from, to } => from
                .iter()
                .any(|pattern| tokens.iter().map(String::as_str).eq(pattern.iter().copied()))
                .then(|| to.iter().map(|t| (*t).to_string()).collect()),
            Self::Complementizer { tail } => {
                if tokens.len() <= tail.len() {
                    return None;
                }
                let split = tokens.len() - tail.len();
                let matches_tail = tokens[split..].iter().map(String::as_str).eq(tail.iter().copied());
                if !matches_tail || !is_lowercase_word(&tokens[split - 1]) {
                    return None;
                }
                let mut rewritten = tokens.to_vec();
                rewritten[split - 1] = COMPLEMENTIZER.to_string();
                Some(rewritten)
            }
        }
    }
}

/// Applies the first matching idiom rule, or returns the tokens unchanged.
#[must_use]
pub fn collapse_idioms(tokens: Vec<String>) -> Vec<String> {
    IDIOM_RULES
        .iter()
        .find_map(|rule| rule.apply(&tokens))
        .unwrap_or(tokens)
}
