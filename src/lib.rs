//! vnframes - VerbNet frame model and multi-format frame matrix synthesis
//!
//! This crate re-exports all layers of the vnframes system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: vnframes_runtime    - RunConfig, generation pipeline, CLI
//! Layer 4: vnframes_corpus     - Corpus, frame matrices, cluster labels
//! Layer 3: vnframes_engine     - Frame formats, annotation, expansion
//! Layer 2: vnframes_parser     - XML class files, class hierarchy loading
//! Layer 1: vnframes_model      - Tokens, roles, frames, verb entries
//! Layer 0: vnframes_foundation - Error, restrictions, preposition classes
//! ```

pub use vnframes_corpus as corpus;
pub use vnframes_engine as engine;
pub use vnframes_foundation as foundation;
pub use vnframes_model as model;
pub use vnframes_parser as parser;
pub use vnframes_runtime as runtime;
