//! Iterator categories and the cursors that carry them.
//!
//! This module models positions within a sequence the way the C++ standard library does: a
//! [`Cursor`] points at one element and a pair of cursors `[first, last)` describes a range. Every
//! cursor type names one of four nested [categories](Category), from [`InputTag`] up to
//! [`RandomAccessTag`], and the algorithms in this crate choose their strategy from that tag at
//! compile time through [`Traversal`].
//!
//! Raw pointers are random access cursors out of the box. [`Reverse`] walks any bidirectional
//! cursor back to front.
#![warn(missing_docs)]

mod category;
mod cursor;
mod reverse;
mod traversal;

pub use category::*;
pub use cursor::*;
pub use reverse::*;
pub use traversal::*;

pub(crate) use cursor::{offset_mut_ptr, offset_ptr};
