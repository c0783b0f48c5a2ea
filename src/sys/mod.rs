//! Thin, strongly typed wrappers around a few libc lookups.
//!
//! # Method
//! Each wrapper owns the buffer it hands to libc and retries with a larger one when the call
//! reports that it was too small, logging the retry as a `tracing` debug event. Errors are mapped
//! from the raw error number onto small typed errors; anything not documented for the call ends
//! up as [`UnexpectedError`] rather than a panic.
#![cfg(target_os = "linux")]

mod error;
mod host;
mod panic;
mod syscall;
mod tty;
mod user;

pub use error::*;
pub use host::*;
pub use tty::*;
pub use user::*;

pub(crate) use panic::*;
pub(crate) use syscall::*;
