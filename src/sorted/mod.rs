//! Set operations over sequences that are already sorted.
//!
//! # Method
//! Everything here assumes its inputs are sorted ascending and free of duplicates under the
//! ordering in use. That lets two sets be compared with a single merge-style pass instead of
//! hashing or repeated lookups. The precondition isn't checked; unsorted input gives a
//! meaningless (but memory-safe) answer.

mod intersection;
mod slice;

pub use intersection::*;
pub use slice::*;
