//! Assertions that hand back an error instead of panicking.
//!
//! [`safe_assert!`](crate::safe_assert) is for checks that are worth making in release builds but
//! shouldn't take the whole process down: a failed condition returns early from the enclosing
//! function with an [`AssertionError`], converted into that function's error type via [`From`].

mod error;
mod macros;

pub use error::*;
