//! Literal-set resolution for prepositional tokens.

use vnframes_foundation::{
    Error, LiteralSet, Logic, Polarity, PrepositionClassHierarchy, Result, SelrestrSet,
    split_label,
};
use vnframes_model::Token;

/// Resolves the literal prepositions a token licenses.
///
/// A token with a value licenses its whitespace-separated words. Otherwise
/// each restriction label is resolved against the hierarchy: `+X` to the
/// literals of X, `-X` to the complement of X under the root class. OR sets
/// take the union of those; unmarked and AND sets take the intersection.
///
/// # Errors
///
/// Returns a restriction resolution error if the token needs a hierarchy and
/// none is given, if a label is unsigned or names an unknown class, or if the
/// combination is empty.
pub fn resolve_literals(
    token: &Token,
    hierarchy: Option<&PrepositionClassHierarchy>,
) -> Result<LiteralSet> {
    if let Some(value) = token.value() {
        return Ok(value.split_whitespace().map(str::to_string).collect());
    }
    let selrestrs = token.selrestrs();
    let Some(hierarchy) = hierarchy else {
        return Err(fail(selrestrs, "no preposition class hierarchy was given"));
    };
    if selrestrs.is_empty() {
        return Err(fail(selrestrs, "token has neither a value nor restrictions"));
    }

    let mut resolved = Vec::with_capacity(selrestrs.len());
    for label in selrestrs.iter() {
        resolved.push(resolve_label(label, selrestrs, hierarchy)?);
    }

    let combined = match selrestrs.logic() {
        Logic::Or => LiteralSet::unions(resolved),
        Logic::Unmarked | Logic::And => resolved
            .into_iter()
            .reduce(LiteralSet::intersection)
            .unwrap_or_default(),
    };
    if combined.is_empty() {
        return Err(fail(selrestrs, "restrictions resolve to no prepositions"));
    }
    Ok(combined)
}

fn resolve_label(
    label: &str,
    selrestrs: &SelrestrSet,
    hierarchy: &PrepositionClassHierarchy,
) -> Result<LiteralSet> {
    let Some((polarity, class)) = split_label(label) else {
        return Err(fail(selrestrs, format!("label '{label}' has no sign")));
    };
    if !hierarchy.contains_class(class) {
        return Err(fail(selrestrs, format!("unknown preposition class '{class}'")));
    }
    match polarity {
        Polarity::Positive => Ok(hierarchy.literals(class).cloned().unwrap_or_default()),
        Polarity::Negative => hierarchy
            .complement(class)
            .map_err(|e| fail(selrestrs, e.to_string())),
    }
}

fn fail(selrestrs: &SelrestrSet, reason: impl Into<String>) -> Error {
    Error::restriction_resolution(selrestrs.labels(), selrestrs.logic(), reason)
}
