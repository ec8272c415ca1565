//! The memory primitive underneath every container: acquiring and releasing raw storage, and
//! constructing or destroying values inside it.
//!
//! [`Allocator`] hands out untyped storage sized in elements rather than bytes, [`RawBuffer`] owns
//! such a region and releases it exactly once, and the free functions [`construct`],
//! [`destroy`] and [`destroy_n`] deal with the values placed inside. Nothing in this module
//! tracks which slots are initialized; that is left to the containers.
#![warn(missing_docs)]

mod allocator;
mod buffer;
mod construct;

pub use allocator::*;
pub use buffer::*;
pub use construct::*;
