//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, restriction sets, preposition classes, and diagnostics.

mod diagnostics;
mod errors;
