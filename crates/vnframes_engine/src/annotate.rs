//! Placeholder annotation passes.
//!
//! Both passes walk a primary token sequence and pair each eligible
//! placeholder with the next noun phrase of the frame's syntax, using a
//! cursor that only moves forward. The restriction pass appends restriction
//! labels; the role pass appends the lower-cased role.

use vnframes_foundation::{DataQualityWarning, Diagnostics, Error, Result, WarningKind};
use vnframes_model::Frame;

use crate::exceptions::{
    PlaceholderSite, ROLE_ON_EXHAUSTION, SELRESTR_BEFORE_LOOKUP, SELRESTR_ON_EXHAUSTION,
    find_exception,
};
use crate::normalize::is_placeholder;

/// Builds a warning located at a frame.
#[must_use]
pub fn frame_warning(
    frame: &Frame,
    kind: WarningKind,
    message: impl Into<String>,
) -> DataQualityWarning {
    let warning = DataQualityWarning::new(kind, message).with_frame(frame.joined());
    match frame.class_id() {
        Some(class_id) => warning.with_class(class_id),
        None => warning,
    }
}

/// Annotates placeholders with selectional restrictions.
///
/// Each eligible placeholder gets the sorted, deduplicated labels of its
/// noun phrase token and of that token's role. The placeholder is shown
/// without its dot qualifier, or as the matching entry of `display` when
/// one is given (so role-qualified tokens can be annotated in place).
///
/// # Errors
///
/// Returns an internal error if `display` does not match the primary length.
pub fn annotate_selrestrs(
    frame: &Frame,
    display: Option<&[String]>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<String>> {
    let primary = frame.primary();
    if let Some(display) = display {
        if display.len() != primary.len() {
            return Err(Error::internal(format!(
                "display has {} tokens for a {}-token frame",
                display.len(),
                primary.len()
            )));
        }
    }

    let mut annotated: Vec<String> = Vec::with_capacity(primary.len());
    let mut cursor = 0;
    for (index, placeholder) in primary.iter().enumerate() {
        let shown = match display {
            Some(display) => display[index].clone(),
            None => placeholder.split('.').next().unwrap_or_default().to_string(),
        };
        if !is_placeholder(placeholder) {
            annotated.push(shown);
            continue;
        }

        let site = PlaceholderSite {
            frame,
            tokens: primary,
            index,
            emitted: &annotated,
        };
        if find_exception(SELRESTR_BEFORE_LOOKUP, &site).is_some() {
            annotated.push(shown);
            continue;
        }

        let Some((found, token)) = frame.noun_phrase_from(cursor) else {
            cursor = frame.syntax().len();
            match find_exception(SELRESTR_ON_EXHAUSTION, &site) {
                Some(exception) => {
                    if let Some(check) = exception.verify.filter(|check| !check.holds(frame)) {
                        diagnostics.push(frame_warning(
                            frame,
                            WarningKind::UnverifiedException,
                            format!("'{}' applied to {placeholder} but {check:?} does not hold", exception.name),
                        ));
                    }
                }
                None => {
                    diagnostics.push(frame_warning(
                        frame,
                        WarningKind::PlaceholderExhausted,
                        format!("no noun phrase left for {placeholder}"),
                    ));
                }
            }
            annotated.push(shown);
            continue;
        };
        cursor = found + 1;

        let mut labels: Vec<String> = token.selrestrs().iter().map(str::to_string).collect();
        let role_type = token.value().unwrap_or_default();
        match frame.role(role_type) {
            Some(role) => labels.extend(role.selrestr_labels()),
            None => {
                diagnostics.push(frame_warning(
                    frame,
                    WarningKind::MissingRole,
                    format!("{placeholder} is bound to unknown role '{role_type}'"),
                ));
            }
        }
        labels.sort();
        labels.dedup();
        annotated.push(format!("{shown}{}", labels.concat()));
    }
    Ok(annotated)
}

/// Qualifies placeholders with the lower-cased role of their noun phrase.
///
/// Placeholders that already mention the role are left as they are.
pub fn annotate_roles(
    frame: &Frame,
    primaries: &[String],
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let mut annotated: Vec<String> = Vec::with_capacity(primaries.len());
    let mut cursor = 0;
    for (index, placeholder) in primaries.iter().enumerate() {
        if !is_placeholder(placeholder) {
            annotated.push(placeholder.clone());
            continue;
        }

        let Some((found, token)) = frame.noun_phrase_from(cursor) else {
            cursor = frame.syntax().len();
            let site = PlaceholderSite {
                frame,
                tokens: primaries,
                index,
                emitted: &annotated,
            };
            if find_exception(ROLE_ON_EXHAUSTION, &site).is_none() {
                diagnostics.push(frame_warning(
                    frame,
                    WarningKind::PlaceholderExhausted,
                    format!("no noun phrase left for {placeholder} in '{}'", primaries.join(" ")),
                ));
            }
            annotated.push(placeholder.clone());
            continue;
        };
        cursor = found + 1;

        let role = token.value().unwrap_or_default().to_lowercase();
        if placeholder.to_lowercase().contains(&role) {
            annotated.push(placeholder.clone());
        } else {
            annotated.push(format!("{placeholder}.{role}"));
        }
    }

    let rejoined = annotated.join(" ");
    let count = rejoined.split_whitespace().count();
    if count != primaries.len() {
        diagnostics.push(frame_warning(
            frame,
            WarningKind::TokenCountMismatch,
            format!("{} tokens became {count}: '{rejoined}'", primaries.len()),
        ));
    }
    annotated
}
