//! A small box of leaf utilities that I kept rewriting in every project, collected in one place.
//!
//! # Purpose
//! None of the items here depend on each other. Each module is a single self-contained operation
//! (or a handful of closely related ones) with no shared state, so any of them can be pulled in
//! alone through its feature flag.
//!
//! The two with any real algorithmic content are:
//! - [`sorted`]: checking whether two sorted sequences share an element, without building the
//!   intersection.
//! - [`search`]: finding the first occurrence of a needle slice inside a haystack slice.
//!
//! # Error Handling
//! The algorithmic modules can't fail: "not found" and "not disjoint" are ordinary answers, so
//! they're expressed as [`Option`] and [`bool`]. Where something can actually go wrong (the
//! [`sys`] helpers), errors are strongly typed enums made of small structs which implement
//! [`Error`](std::error::Error), rather than boxed trait objects.
//!
//! # Dependencies
//! The [`sys`] module relies on `libc` for the thin syscall wrappers and emits `tracing` events
//! when it has to retry a call. Errors get their boilerplate from `derive_more`.
//!
//! # Features
//! - `sorted`: [`sorted`]
//! - `search`: [`search`]
//! - `sys`: [`sys`] (Linux only)

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod assertion;
#[cfg(feature = "search")]
pub mod search;
#[cfg(feature = "sorted")]
pub mod sorted;
#[cfg(all(feature = "sys", target_os = "linux"))]
pub mod sys;
