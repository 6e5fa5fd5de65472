//! Exclusive ownership of a single contiguous block of element slots.
//!
//! [`ArrayPtr`] is the storage layer beneath `SimpleVector`: it owns exactly one
//! heap block of `len` slots (or nothing at all), can move or swap that block,
//! and can hand it back to the caller as a [`RawBlock`]. It never constructs or
//! drops element values on its own, except for [`ArrayPtr::new`], which fills
//! every slot with `T::default()`.

pub mod array_ptr;
pub mod raw;

pub use array_ptr::{ArrayPtr, RawBlock};

#[cfg(test)]
mod tests;
