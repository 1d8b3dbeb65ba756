//! Format derivation.

use std::collections::HashSet;

use vnframes_foundation::{Diagnostics, Error, PrepositionClassHierarchy, Result};
use vnframes_model::Frame;

use crate::annotate::{annotate_roles, annotate_selrestrs};
use crate::collapse::collapse_idioms;
use crate::expand::expand;
use crate::format::FrameFormat;
use crate::normalize::{normalize_all, normalize_annotated};

/// Derives frame formats, optionally against a preposition class hierarchy.
///
/// Expanded formats need the hierarchy only for prepositions given by
/// restriction rather than by literal value.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormatEngine<'h> {
    hierarchy: Option<&'h PrepositionClassHierarchy>,
}

impl<'h> FormatEngine<'h> {
    /// Creates an engine with no hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine resolving restrictions against `hierarchy`.
    #[must_use]
    pub fn with_hierarchy(hierarchy: &'h PrepositionClassHierarchy) -> Self {
        Self {
            hierarchy: Some(hierarchy),
        }
    }

    /// Returns the hierarchy, if any.
    #[must_use]
    pub fn hierarchy(&self) -> Option<&'h PrepositionClassHierarchy> {
        self.hierarchy
    }

    /// Renders a frame in the given format.
    ///
    /// Collapsed and ground-truth formats yield one string; expanded formats
    /// yield one per licensed preposition combination.
    ///
    /// # Errors
    ///
    /// Returns an error if a qualifier is malformed or a preposition's
    /// restrictions cannot be resolved. The error carries the frame and class.
    pub fn format(
        &self,
        frame: &Frame,
        format: FrameFormat,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        self.derive(frame, format, diagnostics).map_err(|e| {
            let e = e.via(format.name()).in_frame(frame.joined());
            match frame.class_id() {
                Some(class_id) => e.in_class(class_id),
                None => e,
            }
        })
    }

    /// Renders a frame in the format with the given name.
    ///
    /// # Errors
    ///
    /// Returns an unknown format error for unrecognized names, otherwise as
    /// [`FormatEngine::format`].
    pub fn format_named(
        &self,
        frame: &Frame,
        name: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        self.format(frame, name.parse()?, diagnostics)
    }

    fn derive(
        &self,
        frame: &Frame,
        format: FrameFormat,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let single = |tokens: Vec<String>| vec![tokens.join(" ")];
        Ok(match format {
            FrameFormat::GtNs => vec![frame.joined()],
            FrameFormat::GtSs => single(annotate_selrestrs(frame, None, diagnostics)?),
            FrameFormat::GtTr => single(annotate_roles(frame, frame.primary(), diagnostics)),
            FrameFormat::CxNs => single(collapsed(frame)?),
            FrameFormat::CxSs => {
                let annotated =
                    annotate_selrestrs(frame, None, diagnostics).map_err(via(FrameFormat::GtSs))?;
                single(
                    annotated
                        .iter()
                        .map(|token| normalize_annotated(token))
                        .collect::<Result<_>>()?,
                )
            }
            FrameFormat::CxTr => {
                let collapsed = collapsed(frame).map_err(via(FrameFormat::CxNs))?;
                single(annotate_roles(frame, &collapsed, diagnostics))
            }
            FrameFormat::ExNs => expand(frame, frame.primary(), self.hierarchy, diagnostics)?,
            FrameFormat::ExSs => {
                let annotated =
                    annotate_selrestrs(frame, None, diagnostics).map_err(via(FrameFormat::GtSs))?;
                self.expanded(frame, &annotated, diagnostics)?
            }
            FrameFormat::ExTr => {
                let annotated = annotate_roles(frame, frame.primary(), diagnostics);
                self.expanded(frame, &annotated, diagnostics)?
            }
            FrameFormat::ExCx => self.expanded_collapsed(frame, diagnostics)?,
            FrameFormat::EtCx => {
                let rendered = self
                    .expanded_collapsed(frame, diagnostics)
                    .map_err(via(FrameFormat::ExCx))?
                    .iter()
                    .map(|expanded| {
                        let tokens: Vec<String> =
                            expanded.split_whitespace().map(str::to_string).collect();
                        annotate_roles(frame, &tokens, diagnostics).join(" ")
                    })
                    .collect();
                dedup_first_seen(rendered)
            }
            FrameFormat::CxSt => single(collapse_idioms(
                roles_and_restrictions(frame, diagnostics).map_err(via(FrameFormat::GtSs))?,
            )),
            FrameFormat::ExSt => {
                let annotated =
                    roles_and_restrictions(frame, diagnostics).map_err(via(FrameFormat::GtSs))?;
                self.expanded(frame, &annotated, diagnostics)?
            }
        })
    }

    /// `ex-ns` over already annotated primaries.
    fn expanded(
        &self,
        frame: &Frame,
        primaries: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        expand(frame, primaries, self.hierarchy, diagnostics).map_err(via(FrameFormat::ExNs))
    }

    fn expanded_collapsed(
        &self,
        frame: &Frame,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let mut collapsed = Vec::new();
        for expanded in self.expanded(frame, frame.primary(), diagnostics)? {
            let tokens: Vec<&str> = expanded.split_whitespace().collect();
            collapsed.push(normalize_all(&tokens)?.join(" "));
        }
        Ok(dedup_first_seen(collapsed))
    }
}

/// Tags an error with the intermediate format it came from.
fn via(format: FrameFormat) -> impl FnOnce(Error) -> Error {
    move |e| e.via(format.name())
}

/// Normalized primary tokens with idioms collapsed.
fn collapsed(frame: &Frame) -> Result<Vec<String>> {
    Ok(collapse_idioms(normalize_all(frame.primary())?))
}

/// Role-qualified tokens annotated with restrictions.
fn roles_and_restrictions(frame: &Frame, diagnostics: &mut Diagnostics) -> Result<Vec<String>> {
    let roles = annotate_roles(frame, frame.primary(), diagnostics);
    annotate_selrestrs(frame, Some(&roles), diagnostics)
}

fn dedup_first_seen(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
