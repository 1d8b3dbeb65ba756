//! Generation pipeline and CLI support for vnframes.
//!
//! This crate provides:
//! - [`RunConfig`] - What to generate and where
//! - [`run`] - Load the class hierarchy and write every matrix and label file
//! - [`dot_qualifiers`] - The `PP.` qualifiers of a written `gt-ns` matrix
//! - [`build_reference`] - A preposition class reference from local sources

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod pipeline;
pub mod reference;

pub use config::{DEFAULT_OUT_DIR, DEFAULT_RESOURCE_DIR, DEFAULT_SELRESTR_REFERENCE, RunConfig};
pub use pipeline::{MatrixSummary, RunReport, dot_qualifiers, load_reference, run};
pub use reference::{build_reference, save_reference};
