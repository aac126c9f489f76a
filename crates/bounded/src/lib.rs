#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

pub mod bounded_array;
pub mod bounded_bitmap;
pub mod bounded_stack;

pub use self::{
    bounded_array::BoundedArray,
    bounded_bitmap::{
        Bool,
        BoundedBitmap,
    },
    bounded_stack::BoundedStack,
};
use core::fmt;

/// Errors that may occure when operating on a bounded data structure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutOfBoundsAccess;

impl fmt::Display for OutOfBoundsAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "out of bounds access to a bounded data structure")
    }
}

/// Index types that may be used as keys for the bounded containers.
pub trait Index: Copy + Clone {
    /// Creates a new key from the given index.
    fn from_index(index: usize) -> Self;
    /// Returns the index from the given key.
    fn into_index(self) -> usize;
}

impl Index for usize {
    #[inline]
    fn from_index(index: usize) -> Self {
        index
    }

    #[inline]
    fn into_index(self) -> usize {
        self
    }
}
