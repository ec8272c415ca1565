#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod cursor;
pub mod error;
pub mod panic;
pub mod result;
