//! Generic algorithms over cursor ranges: copying, moving and filling existing values.
//!
//! Each algorithm is written once and picks its strategy at compile time, in two steps. The
//! [category](crate::cursor::Category) of the source cursor decides how the range is walked:
//! random access ranges are measured and handed to the counted form, anything else is walked
//! until the cursors meet. When both ends of a counted operation turn out to be raw pointers, the
//! element type gets the final say, so a copy of [`Copy`] values becomes a `memmove` and a fill of
//! bytes becomes a `memset`.
//!
//! Every algorithm here works on live values. To build values in raw storage, see
//! [`uninitialized`](crate::uninitialized).
#![warn(missing_docs)]

mod copy;
mod fill;
mod moving;
pub(crate) mod specialize;
#[doc(hidden)]
pub mod strategy;

pub use copy::*;
pub use fill::*;
pub use moving::*;
