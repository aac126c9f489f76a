use super::{
    Index,
    OutOfBoundsAccess,
};
use alloc::vec::Vec;
use core::{
    iter::FromIterator,
    marker::PhantomData,
    ops,
    slice,
};

/// A fixed length array addressed by a typed index.
///
/// The length is set upon construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray<Idx, T> {
    values: Vec<T>,
    marker: PhantomData<fn() -> Idx>,
}

impl<Idx, T> Default for BoundedArray<Idx, T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            marker: Default::default(),
        }
    }
}

impl<Idx, T> FromIterator<T> for BoundedArray<Idx, T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            values: iter.into_iter().collect(),
            marker: Default::default(),
        }
    }
}

impl<Idx, T> BoundedArray<Idx, T> {
    /// Returns the length of the bounded array.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the bounded array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values of the bounded array as slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator yielding shared references over the array values.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.values.iter()
    }

    /// Returns an iterator yielding exclusive references over the array values.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<T> {
        self.values.iter_mut()
    }
}

impl<Idx, T> BoundedArray<Idx, T>
where
    Idx: Index,
{
    /// Creates a new bounded array with the given length.
    ///
    /// Every slot is initialized by the closure given its index.
    pub fn with_len<F>(len: usize, mut placeholder: F) -> Self
    where
        F: FnMut(Idx) -> T,
    {
        Self {
            values: (0..len)
                .map(|idx| placeholder(Idx::from_index(idx)))
                .collect(),
            marker: Default::default(),
        }
    }

    /// Ensures that the given index is valid for the bounded array.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds.
    #[inline]
    fn ensure_valid_index(&self, index: Idx) -> Result<usize, OutOfBoundsAccess> {
        let index = index.into_index();
        if index >= self.len() {
            return Err(OutOfBoundsAccess)
        }
        Ok(index)
    }

    /// Updates the value of the element at the given index.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds for the bounded array.
    #[inline]
    pub fn update(&mut self, index: Idx, new_value: T) -> Result<(), OutOfBoundsAccess> {
        self.ensure_valid_index(index)
            .map(move |index| self.values[index] = new_value)
    }

    /// Returns a shared reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds for the bounded array.
    #[inline]
    pub fn get(&self, index: Idx) -> Result<&T, OutOfBoundsAccess> {
        self.ensure_valid_index(index)
            .map(move |index| &self.values[index])
    }

    /// Returns an exclusive reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds for the bounded array.
    #[inline]
    pub fn get_mut(&mut self, index: Idx) -> Result<&mut T, OutOfBoundsAccess> {
        self.ensure_valid_index(index)
            .map(move |index| &mut self.values[index])
    }
}

impl<Idx, T> ops::Index<Idx> for BoundedArray<Idx, T>
where
    Idx: Index,
{
    type Output = T;

    /// Returns a shared reference to the value at the given index.
    ///
    /// # Panics
    ///
    /// If the index is out of bounds.
    #[inline]
    fn index(&self, index: Idx) -> &Self::Output {
        self.get(index).expect("encountered out of bounds index")
    }
}
