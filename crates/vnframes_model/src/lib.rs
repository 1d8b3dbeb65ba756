//! Lexical model for vnframes.
//!
//! This crate provides:
//! - [`Token`] - Syntax tokens with kind-specific validity rules
//! - [`ThematicRole`] - Roles with mergeable selectional restrictions
//! - [`Frame`] - Primary description, syntax tokens, and roles of one frame
//! - [`VerbEntry`] - Class members keyed by `verb#class-id`
//! - [`ClassId`] - Views over class id strings
//! - Corrections for known resource inconsistencies

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class_id;
pub mod correction;
pub mod frame;
pub mod role;
pub mod token;
pub mod verb;

pub use class_id::{ClassId, class_of_member};
pub use correction::{PRIMARY_CORRECTIONS, PrimaryCorrection, correct_primary, correct_wn_sense};
pub use frame::Frame;
pub use role::ThematicRole;
pub use token::{LEXICAL_PREPOSITIONS, NounPhraseRule, Token};
pub use verb::VerbEntry;
