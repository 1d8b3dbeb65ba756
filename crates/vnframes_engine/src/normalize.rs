//! Stem normalization of primary tokens.
//!
//! Primary tokens carry three kinds of qualifier, removed in this order:
//!
//! | Qualifier | Example | Result |
//! |-----------|---------|--------|
//! | dot | `PP.destination` | `PP` |
//! | underscore | `S_ING` | `S` |
//! | dash | `NP-PRO-ARB` | `NP` |

use vnframes_foundation::{Error, Result};

/// Returns true if a token reads as a lowercase word.
///
/// The token needs at least one cased character and no uppercase ones, so
/// `to_be` qualifies and `_` does not.
#[must_use]
pub fn is_lowercase_word(token: &str) -> bool {
    token.chars().any(char::is_lowercase) && !token.chars().any(char::is_uppercase)
}

/// Returns true for primary tokens that stand for an argument slot.
#[must_use]
pub fn is_placeholder(token: &str) -> bool {
    token.starts_with("NP") || token.starts_with("PP") || token.starts_with('S') || token == "ADVP"
}

/// Removes the dot qualifier, keeping everything before the dot.
///
/// # Errors
///
/// Returns a malformed placeholder error if there is more than one dot.
pub fn strip_dot(token: &str) -> Result<&str> {
    let mut parts = token.split('.');
    let stem = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (_, Some(_)) => Err(Error::malformed_placeholder(token, "more than one dot qualifier")),
        _ => Ok(stem),
    }
}

/// Removes an underscore qualifier. Lowercase words are left alone.
///
/// # Errors
///
/// Returns a malformed placeholder error if there is more than one underscore.
pub fn strip_underscore(token: &str) -> Result<&str> {
    if is_lowercase_word(token) {
        return Ok(token);
    }
    let mut parts = token.split('_');
    let stem = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (_, Some(_)) => Err(Error::malformed_placeholder(
            token,
            "more than one underscore qualifier",
        )),
        _ => Ok(stem),
    }
}

/// Removes every dash qualifier.
#[must_use]
pub fn strip_dashes(token: &str) -> &str {
    token.split('-').next().unwrap_or_default()
}

/// Removes all qualifiers from a primary token.
///
/// Normalizing an already normalized token returns it unchanged.
///
/// # Errors
///
/// Returns a malformed placeholder error for repeated dot or underscore
/// qualifiers.
pub fn normalize_token(token: &str) -> Result<&str> {
    let stem = strip_dot(token)?;
    let stem = strip_underscore(stem)?;
    Ok(strip_dashes(stem))
}

/// Normalizes every token of a sequence.
///
/// # Errors
///
/// Returns the first normalization error.
pub fn normalize_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    tokens
        .iter()
        .map(|t| normalize_token(t.as_ref()).map(str::to_string))
        .collect()
}

/// Splits an annotated token at its first `+` or `-` into stem and suffix.
#[must_use]
pub fn split_annotation(token: &str) -> (&str, &str) {
    let at = token.find(['+', '-']).unwrap_or(token.len());
    token.split_at(at)
}

/// Normalizes the stem of an annotated token, keeping its suffix.
///
/// # Errors
///
/// Returns a malformed placeholder error if the stem is empty or malformed.
pub fn normalize_annotated(token: &str) -> Result<String> {
    let (stem, suffix) = split_annotation(token);
    if stem.is_empty() {
        return Err(Error::malformed_placeholder(token, "no stem before restrictions"));
    }
    Ok(format!("{}{suffix}", normalize_token(stem)?))
}

/// Turns a `PP` placeholder into the `NP` that follows its preposition.
///
/// `PP.destination` becomes `NP.destination`; other tokens are unchanged.
#[must_use]
pub fn pp_to_np(token: &str) -> String {
    match token.strip_prefix("PP") {
        Some(rest) => format!("NP{rest}"),
        None => token.to_string(),
    }
}
