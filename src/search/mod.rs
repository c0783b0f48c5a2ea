//! Searching for one buffer inside another.
//!
//! # Method
//! The search is the naive sliding window: every candidate offset is tried in order and elements
//! are compared pairwise until the first mismatch. It allocates nothing and works for any
//! element type with [`PartialEq`], not just bytes.

mod subsequence;
mod tests;

pub use subsequence::*;
