//! Corpus aggregation and serialization for vnframes.
//!
//! This crate provides:
//! - [`Corpus`] - Every member verb with the frames it licenses
//! - [`FrameMatrix`] - Binary member by frame matrices, CSV in and out
//! - [`ClusterLabels`] / [`ShortClusterLabels`] - Gold cluster labels
//! - [`FrameVariantTable`] - `ex-st` strings mapped to coarser variants
//! - [`OutputLayout`] - Names of every generated file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cluster;
pub mod corpus;
pub mod matrix;
pub mod output;
pub mod variants;

pub use cluster::{ClusterLabels, SequentialIdAllocator, ShortClusterLabels, label_by};
pub use corpus::{Corpus, CorpusEntry, DEFAULT_EXCLUDED_ROLE, FrameStrings};
pub use matrix::{FrameMatrix, MEMBER_HEADER, MatrixRow};
pub use output::{OutputLayout, VERBS_ONLY_SUFFIX, load_list, save_json, save_list};
pub use variants::{FINEST_FORMAT, FrameVariantTable, VARIANT_FORMATS};
