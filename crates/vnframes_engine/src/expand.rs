//! Expansion of frames by licensed preposition.

use tracing::debug;
use vnframes_foundation::{Diagnostics, PrepositionClassHierarchy, Result, WarningKind};
use vnframes_model::Frame;

use crate::annotate::frame_warning;
use crate::exceptions::{LeftoverSite, find_leftover_exception};
use crate::normalize::pp_to_np;
use crate::resolve::resolve_literals;

/// Every combination taking one item from each set, first set slowest.
///
/// The product of no sets is a single empty combination.
#[must_use]
pub fn cartesian_product<T: AsRef<str>>(sets: &[Vec<T>]) -> Vec<Vec<&str>> {
    sets.iter().fold(vec![Vec::new()], |combinations, set| {
        combinations
            .iter()
            .flat_map(|prefix| {
                set.iter().map(move |item| {
                    let mut next = prefix.clone();
                    next.push(item.as_ref());
                    next
                })
            })
            .collect()
    })
}

/// Rewrites `primaries` once per combination of licensed prepositions.
///
/// Frames without prepositional tokens, and the bare `Passive` frame, yield
/// `primaries` joined. Otherwise each `PP` placeholder is replaced by the
/// next literal followed by the placeholder in noun phrase form. A literal
/// already written in the primary is consumed without being inserted again.
///
/// # Errors
///
/// Returns a restriction resolution error if a prepositional token cannot be
/// resolved.
pub fn expand(
    frame: &Frame,
    primaries: &[String],
    hierarchy: Option<&PrepositionClassHierarchy>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<String>> {
    let prepositional: Vec<_> = frame.prepositional_tokens().collect();
    if prepositional.is_empty() || frame.is_passive() {
        return Ok(vec![primaries.join(" ")]);
    }

    let mut sets = Vec::with_capacity(prepositional.len());
    for token in prepositional {
        let literals = resolve_literals(token, hierarchy)?;
        sets.push(literals.into_iter().collect::<Vec<String>>());
    }
    let combinations = cartesian_product(&sets);
    debug!(frame = %frame, combinations = combinations.len(), "expanding frame");

    let mut expanded = Vec::with_capacity(combinations.len());
    for literals in combinations {
        let mut rewritten: Vec<String> = Vec::with_capacity(primaries.len() + literals.len());
        let mut next = 0;
        for placeholder in primaries {
            if placeholder.starts_with("PP") {
                match literals.get(next) {
                    Some(literal) => {
                        rewritten.push((*literal).to_string());
                        rewritten.push(pp_to_np(placeholder));
                    }
                    None => {
                        diagnostics.push(frame_warning(
                            frame,
                            WarningKind::MissingLiteral,
                            format!("no literal left for {placeholder}"),
                        ));
                        rewritten.push(placeholder.clone());
                    }
                }
                next += 1;
            } else {
                if literals.get(next).is_some_and(|literal| placeholder == literal) {
                    next += 1;
                }
                rewritten.push(placeholder.clone());
            }
        }

        if next < literals.len() {
            let leftover = &literals[next..];
            let site = LeftoverSite {
                primary: primaries,
                rewritten: &rewritten,
                leftover,
            };
            match find_leftover_exception(&site) {
                Some(exception) => exception.action.apply(&mut rewritten, leftover),
                None => {
                    diagnostics.push(frame_warning(
                        frame,
                        WarningKind::UnplacedLiteral,
                        format!("unplaced literals [{}]", leftover.join(", ")),
                    ));
                }
            }
        }
        expanded.push(rewritten.join(" "));
    }
    Ok(expanded)
}
