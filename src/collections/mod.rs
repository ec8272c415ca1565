//! General-purpose collection types built on the rest of this crate.
//!
//! # Purpose
//! The lower modules each model one piece of what a container needs: [`memory`](crate::memory)
//! for storage, [`cursor`](crate::cursor) for positions, [`algorithm`](crate::algorithm) and
//! [`uninitialized`](crate::uninitialized) for moving values around. The collections here are
//! where I put those pieces together.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
