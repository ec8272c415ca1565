//! Building values in raw storage.
//!
//! These are the counterparts of the [`algorithm`](crate::algorithm)s for destinations that don't
//! hold values yet: every function here constructs, and none of them drops what was there before.
//! They are all-or-nothing. If constructing one element panics (or a fallible constructor returns
//! an [`Err`]), everything constructed so far is destroyed again before the failure propagates,
//! leaving the destination as raw as it started.
//!
//! Relocation ([`uninitialized_move`] and friends) is the exception, in that it can't fail: it
//! moves bits and the source becomes raw storage instead.
#![warn(missing_docs)]

mod copy;
mod fill;
mod guard;
mod moving;

pub use copy::*;
pub use fill::*;
pub use guard::*;
pub use moving::*;
