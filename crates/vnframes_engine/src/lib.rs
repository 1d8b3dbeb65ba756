//! Frame format derivation for vnframes.
//!
//! This crate provides:
//! - [`FrameFormat`] - The thirteen named frame formats and their dependencies
//! - [`FormatEngine`] - Renders a frame in any format
//! - [`resolve_literals`] - Literal prepositions licensed by a token
//! - Stem normalization, idiom collapse, and the exception tables that
//!   govern annotation and expansion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotate;
pub mod collapse;
pub mod derive;
pub mod exceptions;
pub mod expand;
pub mod format;
pub mod normalize;
pub mod resolve;

pub use annotate::{annotate_roles, annotate_selrestrs};
pub use collapse::{COMPLEMENTIZER, IDIOM_RULES, IdiomRule, collapse_idioms};
pub use derive::FormatEngine;
pub use expand::{cartesian_product, expand};
pub use format::FrameFormat;
pub use normalize::{normalize_all, normalize_annotated, normalize_token, pp_to_np};
pub use resolve::resolve_literals;
