//! Core types, restriction sets, and the preposition-class hierarchy for vnframes.
//!
//! This crate provides:
//! - [`PosKind`] - The closed set of syntax token kinds
//! - [`SelrestrSet`] - Selectional restriction sets with AND/OR modes
//! - [`PrepositionClassHierarchy`] - Preposition class to literal reference table
//! - [`Diagnostics`] - Collector for recoverable data-quality warnings
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostics;
pub mod error;
pub mod hierarchy;
pub mod pos;
pub mod selrestr;

pub use diagnostics::{DataQualityWarning, Diagnostics, WarningKind};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use hierarchy::{LiteralSet, PrepositionClassHierarchy, ROOT_CLASS};
pub use pos::PosKind;
pub use selrestr::{Logic, Polarity, SelrestrSet, split_label};
