//! This crate is my attempt at writing the container half of a standard library, from the raw
//! memory up.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. A growable array looks simple from the outside, but writing
//! one properly means dealing with raw storage, values that are only half constructed, element
//! types that can panic halfway through a clone and copies that overlap themselves. I wanted to
//! build each of those pieces on its own and then put them together.
//!
//! # Method
//! The crate is layered, with each module only depending on the ones before it:
//! - [`memory`]: Acquiring and releasing raw storage, and constructing or destroying single
//!   values in it.
//! - [`cursor`]: Positions within a sequence, classified by how they can move (single-pass,
//!   multi-pass, backwards or with arbitrary jumps). Raw pointers are cursors too.
//! - [`algorithm`]: Copying, moving and filling between ranges of live values.
//! - [`uninitialized`]: The same operations into raw storage, which roll back everything they
//!   built if one element fails.
//! - [`collections`]: [`Vector`](collections::contiguous::Vector), which puts all of the above
//!   together.
//!
//! The algorithms pick the fastest strategy available at compile time. Cursors that can jump
//! handle whole ranges at once, element types that are [`Copy`] get copied as plain memory and
//! everything else falls back to a loop. None of this shows up in the API.
//!
//! # Error Handling
//! Specifically for a container library, it is more ergonomic for functions to panic in some
//! cases, because users don't want to be forced to handle an error every time they invoke a
//! method. For example, imagine having to handle the possibility of a capacity overflow every time
//! you push into a Vector. Methods that can't reasonably fail panic, while methods with a `try_`
//! prefix return a [`Result`] instead. Running out of memory goes to
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) unless the `try_` form was used.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate uses `std` for the global allocator and not much else. I'm not going to go and use
//! [`Vec`] to write [`Vector`](collections::contiguous::Vector) or anything; it is only used in
//! tests, as a model to compare against.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming, and on `log` so that reallocations can be traced.
#![feature(specialization)]
#![feature(extend_one)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]
#![feature(doc_cfg)]

// #![warn(missing_docs)]
#![allow(incomplete_features)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
#[cfg(feature = "collections")]
#[doc(cfg(feature = "collections"))]
pub mod collections;
pub mod cursor;
pub mod memory;
pub mod uninitialized;

pub(crate) mod util;
